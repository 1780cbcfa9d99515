/// Replaces every `{{name}}` placeholder in `template` with the matching
/// value from `params`. Unknown placeholders are left untouched.
///
/// The template is scanned once, so substituted values are never
/// interpolated again.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let name = &after_open[..end];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}
