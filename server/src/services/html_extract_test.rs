use super::*;

fn extractor() -> HtmlExtractor {
    HtmlExtractor::new().unwrap()
}

#[test]
fn images_keep_order_and_alt() {
    let html = r#"
        <img src="https://cdn.example.com/logo.png" alt="Logo" width="200">
        <IMG ALT='Fachada' SRC='https://cdn.example.com/house.jpg'>
    "#;
    let out = extractor().extract(html);
    assert_eq!(
        out.images,
        vec![
            ExtractedImage { url: "https://cdn.example.com/logo.png".into(), alt: "Logo".into() },
            ExtractedImage { url: "https://cdn.example.com/house.jpg".into(), alt: "Fachada".into() },
        ]
    );
}

#[test]
fn tracking_pixels_and_relative_sources_are_skipped() {
    let html = r#"
        <img src="https://track.example.com/open.gif" width="1" height="1">
        <img src="/local/spacer.gif">
        <img src="data:image/png;base64,AAAA">
        <img src="https://cdn.example.com/a.jpg?x=1&amp;y=2">
        <img src="https://cdn.example.com/a.jpg?x=1&amp;y=2">
    "#;
    let out = extractor().extract(html);
    assert_eq!(out.images.len(), 1);
    assert_eq!(out.images[0].url, "https://cdn.example.com/a.jpg?x=1&y=2");
    assert_eq!(out.images[0].alt, "");
}

#[test]
fn descriptions_strip_markup_and_entities() {
    let html = "<p style=\"x\">Miami sigue <strong>creciendo</strong>&nbsp;este a&ntilde;o, con m&aacute;s demanda.</p>\
                <p>Corto</p>\
                <h2>Las mejores zonas para invertir en 2024</h2>";
    let out = extractor().extract(html);
    assert_eq!(
        out.descriptions,
        vec![
            "Miami sigue creciendo este año, con más demanda.".to_owned(),
            "Las mejores zonas para invertir en 2024".to_owned(),
        ]
    );
}

#[test]
fn style_and_script_blocks_are_ignored() {
    let html = "<head><title>x</title></head><style>p { color: red; }</style>\
                <script>var p = '<p>no debería aparecer en la lista</p>';</script>\
                <p>Este párrafo sí forma parte del contenido.</p>";
    let out = extractor().extract(html);
    assert_eq!(out.descriptions, vec!["Este párrafo sí forma parte del contenido.".to_owned()]);
}

#[test]
fn duplicate_paragraphs_collapse() {
    let html = "<p>Texto repetido en el pie de página</p><p>Texto repetido en el pie de página</p>";
    assert_eq!(extractor().extract(html).descriptions.len(), 1);
}

#[test]
fn empty_html_extracts_nothing() {
    assert_eq!(extractor().extract(""), Extracted::default());
}

#[test]
fn numeric_and_uppercase_entities_decode() {
    let html = "<p>&Aacute;REA DE &Ntilde;OS: caf&#233; y la casa de Mar&#x00ED;a&#8217;s &uuml;ber</p>";
    assert_eq!(
        extractor().extract(html).descriptions,
        vec!["ÁREA DE ÑOS: café y la casa de María\u{2019}s über".to_owned()]
    );
}

#[test]
fn entities_decode_once_and_unknown_ones_stay() {
    assert_eq!(extractor().decode_entities("&amp;nbsp; &bogus; &#0; &lt;b&gt;"), "&nbsp; &bogus; &#0; <b>");
}
