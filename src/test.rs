use super::*;

#[test]
fn test_list() {
    assert_eq!(60, list(None).len());
    assert_eq!(3, list(Some(StatusClass::Informational)).len());

    let redirects = list(Some(StatusClass::Redirection));
    assert!(redirects.iter().all(|e| e.class == StatusClass::Redirection));
    assert_eq!(Some(306), redirects.iter().find(|e| e.name == "Unused").map(|e| e.code));
}

#[test]
fn test_lookup() {
    let entries = lookup(&["404", "teapot", " LoopDetected "]).expect("all queries resolve");
    let codes: Vec<u16> = entries.iter().map(|e| e.code).collect();
    assert_eq!(vec![404, 418, 508], codes);
    assert_eq!("Teapot", entries[1].name);

    let queries = vec!["200".to_string()];
    assert_eq!(Ok(vec![Entry::from(StatusCode::OK)]), lookup(&queries));
}

#[test]
fn test_lookup_failures() {
    assert_eq!(
        Err(vec![Error::UnknownCode(499)]),
        lookup(&["404", "499"])
    );
    assert_eq!(
        Err(vec![Error::OutOfRange(600), Error::UnknownName("nope".into())]),
        lookup(&["600", "ok", "nope"])
    );
}

#[test]
fn test_entry_json() -> serde_json::Result<()> {
    let value = serde_json::to_value(Entry::from(StatusCode::Teapot))?;
    assert_eq!(
        serde_json::json!({
            "code": 418,
            "name": "Teapot",
            "reason": "I'm a teapot",
            "class": "client_error",
        }),
        value
    );
    Ok(())
}

#[test]
fn test_entry_display() {
    let line = Entry::from(StatusCode::NotFound).to_string();
    assert!(line.starts_with("404 NotFound "), "{line}");
    assert!(line.ends_with(" Not Found"), "{line}");
}
