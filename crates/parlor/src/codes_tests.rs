use super::*;

#[test]
fn test_is_code() {
    assert!(is_code("*help"));
    assert!(is_code("  *4"));
    assert!(!is_code("e2e4"));
}

#[test]
fn test_parse_by_name_and_index() {
    assert_eq!(Code::parse("*help").unwrap(), Code::Help);
    assert_eq!(Code::parse("*0").unwrap(), Code::Help);
    assert_eq!(Code::parse("*1").unwrap(), Code::Show);
    assert_eq!(Code::parse("*4").unwrap(), Code::Resign);
    assert_eq!(Code::parse("*RESIGN").unwrap(), Code::Resign);
    assert_eq!(Code::parse("*5").unwrap(), Code::Pieces);
    assert_eq!(Code::parse("*reset").unwrap(), Code::Reset);
}

#[test]
fn test_parse_arguments() {
    assert_eq!(
        Code::parse("*fen 4k3/8/8/8/8/8/8/4K3 w - -").unwrap(),
        Code::Fen("4k3/8/8/8/8/8/8/4K3 w - -".to_string())
    );
    assert_eq!(
        Code::parse("*2 4k3/8/8/8/8/8/8/4K3 w - -").unwrap(),
        Code::Fen("4k3/8/8/8/8/8/8/4K3 w - -".to_string())
    );
    assert_eq!(Code::parse("*prev").unwrap(), Code::Prev(None));
    assert_eq!(Code::parse("*prev 2").unwrap(), Code::Prev(Some(2)));
    assert_eq!(Code::parse("*3 1").unwrap(), Code::Prev(Some(1)));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(Code::parse("*dance"), Err(ParlorError::UnknownCode(_))));
    assert!(matches!(Code::parse("*7"), Err(ParlorError::UnknownCode(_))));
    assert!(matches!(
        Code::parse("*fen"),
        Err(ParlorError::BadCodeArgument { code: "fen", .. })
    ));
    assert!(matches!(
        Code::parse("*prev last"),
        Err(ParlorError::BadCodeArgument { code: "prev", .. })
    ));
}

#[test]
fn test_help_lists_every_code() {
    let help = help_text();
    for (i, (name, _)) in CODES.iter().enumerate() {
        assert!(help.contains(&format!("(*{i}) *{name}")), "{help}");
    }
}
