use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: &'static str,
    pub value: String,
}

/// A `Label: value` line.
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    html! {
        <p><strong>{props.label}</strong>{" "}{&props.value}</p>
    }
}

pub fn fields(rows: Vec<(&'static str, String)>) -> Html {
    rows.into_iter()
        .map(|(label, value)| html! { <Field {label} {value} /> })
        .collect()
}
