//! Error construction from `%s` templates.

use std::fmt::Display;

use sundry_foundation::Error;

/// Builds an error by substituting `args` into the `%s` placeholders of
/// `template`, in order.
///
/// Arguments beyond the number of placeholders are dropped. Placeholders
/// with no matching argument are left as `%s`.
pub fn truncating_error(template: &str, args: &[&dyn Display]) -> Error {
    let mut message = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("%s") {
        message.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => message.push_str(&arg.to_string()),
            None => message.push_str("%s"),
        }
        rest = &rest[pos + 2..];
    }
    message.push_str(rest);
    Error::message(message)
}
