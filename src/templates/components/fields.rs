use maud::{html, Markup};

fn field_label(label: &str, name: &str, required: bool) -> Markup {
    html! {
        label for=(name) {
            (label)
            @if required {
                " " span class="required" { "*" }
            } @else {
                " " span class="meta" { "(optional)" }
            }
        }
    }
}

pub fn text_field(
    label: &str,
    name: &str,
    value: &str,
    input_type: &str,
    placeholder: &str,
    required: bool,
) -> Markup {
    html! {
        div class="field" {
            (field_label(label, name, required))
            input
                type=(input_type)
                id=(name)
                name=(name)
                value=(value)
                placeholder=(placeholder)
                required[required];
        }
    }
}

pub fn textarea_field(
    label: &str,
    name: &str,
    value: &str,
    rows: u8,
    placeholder: &str,
    required: bool,
) -> Markup {
    html! {
        div class="field" {
            (field_label(label, name, required))
            textarea id=(name) name=(name) rows=(rows) placeholder=(placeholder) required[required] {
                (value)
            }
        }
    }
}

/// Radio group for a small closed set, e.g. furnished yes/no.
pub fn choice_field(label: &str, name: &str, current: &str, options: &[(&str, &str)]) -> Markup {
    html! {
        div class="field" {
            (field_label(label, name, true))
            div class="choices" {
                @for (value, text) in options {
                    label {
                        input type="radio" name=(name) value=(value) checked[*value == current];
                        " " (text)
                    }
                }
            }
        }
    }
}
