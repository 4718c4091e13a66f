//! Email syntax checking and canonicalization.

use sundry_foundation::{Error, Result};

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Decides whether a string is a syntactically valid email address.
pub trait EmailValidator {
    /// Returns true if `candidate` is an email address.
    fn is_email(&self, candidate: &str) -> bool;
}

impl<F> EmailValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_email(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// Built-in validator for the common `local@domain.tld` shape.
///
/// The local part is dot-separated atoms of RFC 5322 `atext`; quoted local
/// parts and IP-literal domains are rejected. The domain needs at least two
/// LDH labels and an alphabetic top-level label.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxValidator;

impl EmailValidator for SyntaxValidator {
    fn is_email(&self, candidate: &str) -> bool {
        if candidate.len() > MAX_EMAIL_LEN {
            return false;
        }
        match candidate.split_once('@') {
            Some((local, domain)) => valid_local(local) && valid_domain(domain),
            None => false,
        }
    }
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn valid_local(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= MAX_LOCAL_LEN
        && local
            .split('.')
            .all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };
    labels.len() >= 2
        && labels.iter().all(|label| valid_label(label))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// True if `s` passes the built-in [`SyntaxValidator`].
pub fn is_email(s: &str) -> bool {
    SyntaxValidator.is_email(s)
}

/// Canonicalizes an email address using the built-in [`SyntaxValidator`].
///
/// See [`normalize_email_with`].
///
/// # Errors
///
/// Returns a format error when `s` is not an email address.
pub fn normalize_email(s: &str) -> Result<String> {
    normalize_email_with(s, &SyntaxValidator)
}

/// Canonicalizes an email address after checking it with `validator`.
///
/// Both the local part and the domain are lowercased for every provider.
/// Gmail addresses (`gmail.com` or `googlemail.com`) are further rewritten
/// to `gmail.com` with dots removed from the local part and any `+tag`
/// suffix dropped.
///
/// # Errors
///
/// Returns a format error when `validator` rejects `s`.
pub fn normalize_email_with(s: &str, validator: &dyn EmailValidator) -> Result<String> {
    if !validator.is_email(s) {
        return Err(Error::format(s, "an email"));
    }
    let Some((local, domain)) = s.rsplit_once('@') else {
        return Err(Error::format(s, "an email"));
    };
    let mut local = local.to_lowercase();
    let mut domain = domain.to_lowercase();
    if domain == "gmail.com" || domain == "googlemail.com" {
        domain = "gmail.com".to_string();
        local.retain(|c| c != '.');
        if let Some(plus) = local.find('+') {
            local.truncate(plus);
        }
    }
    Ok(format!("{local}@{domain}"))
}
