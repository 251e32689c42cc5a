use std::collections::HashMap;

/// Parse the free-form response blob into key/value fields.
///
/// The blob is `key=value` pairs joined by `&`. Pairs that do not split
/// into exactly two parts on `=` are silently dropped; duplicate keys
/// overwrite earlier ones in parse order. Keys are case-sensitive.
pub fn parse_response_blob(blob: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    if blob.is_empty() {
        return fields;
    }

    for pair in blob.split('&') {
        let parts: Vec<&str> = pair.split('=').collect();
        if parts.len() == 2 {
            fields.insert(parts[0].to_string(), parts[1].to_string());
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_pairs() {
        let fields = parse_response_blob("txnId=TXN123&Status=SUCCESS&responseCode=00");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["txnId"], "TXN123");
        assert_eq!(fields["Status"], "SUCCESS");
    }

    #[test]
    fn test_empty_blob() {
        assert!(parse_response_blob("").is_empty());
    }

    #[test]
    fn test_malformed_pairs_are_dropped() {
        let fields = parse_response_blob("txnId=TXN1&garbage&a=b=c&Status=FAILURE");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["txnId"], "TXN1");
        assert_eq!(fields["Status"], "FAILURE");
        assert!(!fields.contains_key("a"));
        assert!(!fields.contains_key("garbage"));
    }

    #[test]
    fn test_duplicate_keys_overwrite() {
        let fields = parse_response_blob("Status=FAILURE&Status=SUCCESS");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["Status"], "SUCCESS");
    }

    #[test]
    fn test_empty_value_is_kept() {
        let fields = parse_response_blob("txnRef=&Status=SUCCESS");
        assert_eq!(fields["txnRef"], "");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let fields = parse_response_blob("status=SUCCESS");
        assert!(!fields.contains_key("Status"));
        assert_eq!(fields["status"], "SUCCESS");
    }
}
