/// Fills `{field}` placeholders in `template` in a single left-to-right pass.
///
/// Only names listed in `fields` are substituted; any other brace group (LaTeX
/// arguments, CSS, etc.) is copied through verbatim. Substituted values are never
/// rescanned, so user text containing `{summary}` stays literal.
pub fn fill(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substitution = after.find('}').and_then(|close| {
            let key = &after[..close];
            fields
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (close, *value))
        });

        match substitution {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
