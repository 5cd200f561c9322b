use super::*;

#[test]
fn defaults_without_branding() {
    let theme = Theme::from_chrome(&Chrome::default());
    assert_eq!(theme.logo, DEFAULT_LOGO);
    assert_eq!(theme.background, None);
    assert_eq!(theme.header, Color::White);
}

#[test]
fn branding_colors_are_parsed() {
    let chrome = Chrome {
        logo: Some("Prow".into()),
        background_color: Some("#102030".into()),
        header_color: Some("blue".into()),
        ..Default::default()
    };
    let theme = Theme::from_chrome(&chrome);
    assert_eq!(theme.logo, "Prow");
    assert_eq!(theme.background, Some(Color::Rgb(0x10, 0x20, 0x30)));
    assert_eq!(theme.header, Color::Blue);
}

#[test]
fn unparsable_colors_are_ignored() {
    let chrome = Chrome {
        header_color: Some("not a colour".into()),
        ..Default::default()
    };
    assert_eq!(Theme::from_chrome(&chrome).header, Color::White);
}
