/// Derive the next public customer identifier from the most recently
/// assigned one.
///
/// The identifier is `MC_<n>` with a strictly increasing, never-reused
/// numeric suffix (the text after the first underscore). `None` means no
/// customer exists yet and yields `MC_1`. A predecessor that does not carry
/// a numeric suffix is a data corruption and is reported as an error rather
/// than silently restarting the sequence.
pub fn next_unique_id(last: Option<&str>) -> Result<String, String> {
    match last {
        None => Ok("MC_1".to_string()),
        Some(last) => {
            let suffix = last
                .split_once('_')
                .map(|(_, suffix)| suffix)
                .ok_or_else(|| format!("Malformed unique id '{last}': missing underscore"))?;
            let n: u64 = suffix
                .parse()
                .map_err(|_| format!("Malformed unique id '{last}': non-numeric suffix"))?;
            Ok(format!("MC_{}", n + 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_numeric_suffix() {
        assert_eq!(next_unique_id(Some("MC_115")).unwrap(), "MC_116");
    }

    #[test]
    fn first_customer_gets_mc_1() {
        assert_eq!(next_unique_id(None).unwrap(), "MC_1");
    }

    #[test]
    fn malformed_predecessor_is_an_error() {
        assert!(next_unique_id(Some("MC115")).is_err());
        assert!(next_unique_id(Some("MC_abc")).is_err());
    }
}
