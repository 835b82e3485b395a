const DEPENDENCIES_SECTION: &str = "[dependencies]";

/// Extracts the direct dependency names from a manifest's `[dependencies]`
/// section. Unrecognized lines are ignored rather than rejected.
pub fn parse_manifest_dependencies(input: &str) -> Vec<String> {
    let mut dependencies: Vec<String> = Vec::new();
    let mut in_dependencies = false;

    for raw_line in input.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_dependencies = line == DEPENDENCIES_SECTION;
            continue;
        }
        if !in_dependencies {
            continue;
        }

        let Some((name, _rest)) = line.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            continue;
        }
        if !dependencies.iter().any(|existing| existing == name) {
            dependencies.push(name.to_string());
        }
    }

    dependencies
}
