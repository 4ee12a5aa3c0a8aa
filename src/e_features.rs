/// Optional cargo features and whether this build has them.
pub const FEATURES: [(&str, bool); 2] = [
    ("uses_serde", cfg!(feature = "uses_serde")),
    ("color", cfg!(feature = "color")),
];

/// Feature names, disabled ones prefixed with "!".
pub fn get_feature_flags() -> Vec<String> {
    FEATURES
        .iter()
        .map(|(name, enabled)| {
            if *enabled {
                name.to_string()
            } else {
                format!("!{}", name)
            }
        })
        .collect()
}

/// The flags as a JSON array of strings, as printed by `--version`.
pub fn get_feature_flags_json() -> String {
    let quoted: Vec<String> = get_feature_flags()
        .iter()
        .map(|flag| format!("\"{}\"", flag))
        .collect();
    format!("[{}]", quoted.join(", "))
}
