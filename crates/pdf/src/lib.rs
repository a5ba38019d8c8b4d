//! Print/PDF template building: pure functions assembling a standalone
//! HTML document (inline CSS, fixed A4 page) stamped with the entreprise
//! profile. No I/O happens here; downstream print-to-PDF rendering is an
//! external collaborator.
//!
//! Escaping contract: every entreprise-sourced string interpolated by the
//! header/footer builders goes through [`escape::escape_html`]. The body
//! content passed to [`wrap_document`] is caller-trusted and inserted
//! verbatim.

pub mod escape;

use escape::escape_html;
use models::entreprise::Entreprise;

/// Theme colors baked into the generated stylesheet. Values mirror the UI
/// theme at call time; the produced CSS string is not reactive.
#[derive(Clone, Debug)]
pub struct Theme {
    pub primary: String,
    pub accent: String,
    pub text: String,
    pub muted: String,
    pub border: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1f6f6b".to_string(),
            accent: "#2a9d8f".to_string(),
            text: "#1c1c1c".to_string(),
            muted: "#6b7280".to_string(),
            border: "#d1d5db".to_string(),
        }
    }
}

/// Fixed print-oriented CSS ruleset with the theme colors baked in.
pub fn base_styles(theme: &Theme) -> String {
    format!(
        r#"@page {{ size: A4; margin: 18mm 14mm; }}
* {{ box-sizing: border-box; }}
body {{ font-family: "Helvetica Neue", Arial, sans-serif; color: {text}; font-size: 12px; margin: 0; }}
h1, h2 {{ color: {primary}; margin: 0 0 6px 0; }}
.header {{ border-bottom: 2px solid {accent}; padding-bottom: 8px; margin-bottom: 16px; }}
.header .title {{ font-size: 18px; font-weight: 600; color: {primary}; }}
.header .line {{ color: {muted}; margin-top: 2px; }}
.content {{ min-height: 180mm; }}
table {{ width: 100%; border-collapse: collapse; }}
th, td {{ border: 1px solid {border}; padding: 6px 8px; text-align: left; }}
th {{ background: {accent}; color: #ffffff; }}
.footer {{ border-top: 1px solid {border}; margin-top: 16px; padding-top: 6px; color: {muted}; font-size: 10px; text-align: center; }}"#,
        text = theme.text,
        primary = theme.primary,
        accent = theme.accent,
        muted = theme.muted,
        border = theme.border,
    )
}

/// Rendering options for the company header block.
#[derive(Clone, Debug)]
pub struct HeaderOptions {
    /// Document title line, e.g. "Facture N° 2024-017".
    pub title: Option<String>,
    /// Whether to render the email/telephone contact line.
    pub show_contact: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self { title: None, show_contact: true }
    }
}

/// Company header block: title, address, and (optionally) contact lines.
/// Absent optional fields are omitted entirely, no placeholder text.
pub fn company_header_html(entreprise: &Entreprise, opts: &HeaderOptions) -> String {
    let mut out = String::from("<div class=\"header\">\n");
    if let Some(title) = &opts.title {
        out.push_str(&format!("  <div class=\"title\">{}</div>\n", escape_html(title)));
    }
    out.push_str(&format!("  <div class=\"line\">{}</div>\n", escape_html(&entreprise.adresse)));
    if opts.show_contact {
        let mut contact: Vec<String> = Vec::new();
        if let Some(email) = &entreprise.email {
            contact.push(escape_html(email));
        }
        if let Some(telephone) = &entreprise.telephone {
            contact.push(format!("Tél : {}", escape_html(telephone)));
        }
        if !contact.is_empty() {
            out.push_str(&format!("  <div class=\"line\">{}</div>\n", contact.join(" | ")));
        }
    }
    out.push_str("</div>");
    out
}

/// Company footer block with the legal identifier line.
pub fn company_footer_html(entreprise: &Entreprise) -> String {
    let legal = [
        ("ICE", entreprise.ice),
        ("RC", entreprise.rc),
        ("IF", entreprise.fiscal_id),
        ("CNSS", entreprise.cnss),
        ("Patente", entreprise.patente),
        ("RIB", entreprise.rib),
    ]
    .iter()
    .map(|(label, value)| format!("{label} : {value}"))
    .collect::<Vec<_>>()
    .join(" - ");

    format!(
        "<div class=\"footer\">\n  <div>{}</div>\n  <div>{}</div>\n</div>",
        escape_html(&entreprise.adresse),
        legal,
    )
}

/// Assemble a complete standalone HTML document. The title is escaped;
/// `content_html` is inserted verbatim (the caller escapes any user data
/// placed in the body).
pub fn wrap_document(title: &str, content_html: &str, extra_styles: Option<&str>) -> String {
    let theme = Theme::default();
    let mut styles = base_styles(&theme);
    if let Some(extra) = extra_styles {
        styles.push('\n');
        styles.push_str(extra);
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\" />\n<title>{title}</title>\n<style>\n{styles}\n</style>\n</head>\n<body>\n{content}\n</body>\n</html>",
        title = escape_html(title),
        styles = styles,
        content = content_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::entreprise::{Entreprise, EntrepriseData};

    fn entreprise(adresse: &str, email: Option<&str>, telephone: Option<&str>) -> Entreprise {
        Entreprise::new(EntrepriseData {
            ice: 1234567,
            cnss: 456,
            rc: 789,
            fiscal_id: 111,
            rib: 222,
            patente: 333,
            adresse: adresse.to_string(),
            email: email.map(str::to_string),
            telephone: telephone.map(str::to_string),
        })
    }

    #[test]
    fn header_escapes_entreprise_fields() {
        let e = entreprise("<script>", None, None);
        let html = company_header_html(&e, &HeaderOptions::default());
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn footer_escapes_entreprise_fields() {
        let e = entreprise("<script>", None, None);
        let html = company_footer_html(&e);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("ICE : 1234567"));
        assert!(html.contains("RIB : 222"));
    }

    #[test]
    fn absent_contact_fields_are_omitted() {
        let e = entreprise("1 Rue X", None, None);
        let html = company_header_html(&e, &HeaderOptions::default());
        assert!(!html.contains("Tél"));
        // only title-less header + address line
        assert_eq!(html.matches("class=\"line\"").count(), 1);
    }

    #[test]
    fn contact_line_renders_present_fields() {
        let e = entreprise("1 Rue X", Some("c@x.ma"), Some("0522-000000"));
        let html = company_header_html(&e, &HeaderOptions::default());
        assert!(html.contains("c@x.ma | Tél : 0522-000000"));
    }

    #[test]
    fn header_title_is_escaped() {
        let e = entreprise("1 Rue X", None, None);
        let opts = HeaderOptions { title: Some("Facture <N°1>".into()), ..Default::default() };
        let html = company_header_html(&e, &opts);
        assert!(html.contains("Facture &lt;N°1&gt;"));
    }

    #[test]
    fn wrap_document_escapes_title_and_keeps_body_verbatim() {
        let html = wrap_document("Devis & Factures", "<div id=\"body\">ok</div>", None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Devis &amp; Factures</title>"));
        assert!(html.contains("<div id=\"body\">ok</div>"));
        assert!(html.contains("@page { size: A4;"));
    }

    #[test]
    fn extra_styles_are_appended() {
        let html = wrap_document("t", "", Some(".invoice { margin-top: 4mm; }"));
        assert!(html.contains(".invoice { margin-top: 4mm; }"));
    }

    #[test]
    fn base_styles_bake_theme_colors() {
        let theme = Theme { primary: "#123456".into(), ..Default::default() };
        let css = base_styles(&theme);
        assert!(css.contains("#123456"));
    }
}
