/// One line of a listing's "additional details" block, e.g. `Bedroom: 3`.
/// Lines without a colon keep their text in `value` with an empty `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub key: String,
    pub value: String,
}

pub fn parse_details(text: &str) -> Vec<Detail> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((key, value)) => Detail {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => Detail {
                key: String::new(),
                value: line.to_string(),
            },
        })
        .collect()
}
