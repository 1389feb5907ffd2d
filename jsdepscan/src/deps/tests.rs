#[cfg(test)]
mod tests {
    use super::super::args::{parse_arguments, ArgError, Cursor, ParsedDeclaration};

    /// Parses an argument list (everything after the opening parenthesis).
    fn parse(input: &str) -> Result<ParsedDeclaration, ArgError> {
        let mut cur = Cursor::new(input);
        parse_arguments(&mut cur)
    }

    #[test]
    fn test_minimal_declaration() {
        let decl = parse("'ns', [], [])").unwrap();
        assert_eq!(decl.namespace, "ns");
        assert!(decl.requires.is_empty());
        assert!(decl.provides.is_empty());
        assert!(!decl.is_module);
        assert!(decl.load_flags.is_empty());
    }

    #[test]
    fn test_mixed_quotes_and_whitespace() {
        let decl = parse("\"ns\", [ 'a' , \"b\" ], ['c'])").unwrap();
        assert_eq!(decl.requires, vec!["a", "b"]);
        assert_eq!(decl.provides, vec!["c"]);
    }

    #[test]
    fn test_multiline_arguments() {
        let decl = parse("'ns',\n    ['a',\n     'b'],\n    [])").unwrap();
        assert_eq!(decl.requires, vec!["a", "b"]);
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let decl = parse("'it\\'s', [], [])").unwrap();
        assert_eq!(decl.namespace, "it's");
    }

    #[test]
    fn test_boolean_fourth_argument() {
        assert!(parse("'ns', [], [], true)").unwrap().is_module);
        assert!(!parse("'ns', [], [], false)").unwrap().is_module);
    }

    #[test]
    fn test_object_fourth_argument() {
        let decl = parse("'ns', [], [], {'module': 'goog', 'lang': 'es6'})").unwrap();
        assert!(!decl.is_module);
        assert_eq!(decl.load_flags.get("module").map(String::as_str), Some("goog"));
        assert_eq!(decl.load_flags.get("lang").map(String::as_str), Some("es6"));
    }

    #[test]
    fn test_empty_object_is_valid_and_not_module() {
        let decl = parse("'ns', [], [], {})").unwrap();
        assert!(!decl.is_module);
        assert!(decl.load_flags.is_empty());
    }

    #[test]
    fn test_missing_namespace() {
        assert_eq!(parse("[], [])").unwrap_err(), ArgError::BadNamespace);
        assert_eq!(parse("42, [], [])").unwrap_err(), ArgError::BadNamespace);
    }

    #[test]
    fn test_empty_namespace_rejected() {
        assert_eq!(parse("'', [], [])").unwrap_err(), ArgError::BadNamespace);
    }

    #[test]
    fn test_too_few_arguments() {
        assert_eq!(parse("'ns', [])").unwrap_err(), ArgError::WrongArgCount);
        assert_eq!(parse("'ns')").unwrap_err(), ArgError::WrongArgCount);
    }

    #[test]
    fn test_too_many_arguments() {
        assert_eq!(
            parse("'ns', [], [], false, [])").unwrap_err(),
            ArgError::WrongArgCount
        );
        assert_eq!(
            parse("'ns', [], [], {}, [])").unwrap_err(),
            ArgError::WrongArgCount
        );
    }

    #[test]
    fn test_non_array_list_argument() {
        assert_eq!(parse("'ns', 'a', [])").unwrap_err(), ArgError::BadStringArray);
        assert_eq!(parse("'ns', [], {})").unwrap_err(), ArgError::BadStringArray);
        assert_eq!(parse("'ns', [1], [])").unwrap_err(), ArgError::BadStringArray);
    }

    #[test]
    fn test_bad_fourth_argument_shape() {
        assert_eq!(parse("'ns', [], [], [])").unwrap_err(), ArgError::BadOptionalArg);
        assert_eq!(
            parse("'ns', [], [], truthy)").unwrap_err(),
            ArgError::BadOptionalArg
        );
    }

    #[test]
    fn test_bare_object_key_rejected() {
        assert_eq!(
            parse("'ns', [], [], {module: 'goog'})").unwrap_err(),
            ArgError::BadLoadFlagEntry
        );
        assert_eq!(
            parse("'ns', [], [], {'module': goog})").unwrap_err(),
            ArgError::BadLoadFlagEntry
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(parse("'ns), [], [])").unwrap_err(), ArgError::UnterminatedString);
    }
}
