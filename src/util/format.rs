/// Formats a coordinate with an explicit `+` for positive values.
///
/// Zero and negative values are printed as-is.
pub fn add_number_prefix(value: i32) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
