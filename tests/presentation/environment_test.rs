use hushwave::presentation::Environment;

#[test]
fn given_known_names_when_parsing_then_case_and_aliases_accepted() {
    assert_eq!(
        Environment::try_from("PROD".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from("development".to_string()),
        Ok(Environment::Local)
    );
    assert_eq!(
        Environment::try_from(" test ".to_string()),
        Ok(Environment::Test)
    );
}

#[test]
fn given_unknown_name_when_parsing_then_error_names_the_variable() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();

    assert!(err.contains("APP_ENVIRONMENT"));
}

#[test]
fn given_environment_when_displayed_then_lowercase() {
    assert_eq!(Environment::Prod.to_string(), "prod");
}
