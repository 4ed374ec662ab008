use super::*;

#[derive(Debug, Clone)]
/// `<link>` element placed in a page head (stylesheets, icons, preloads).
pub struct Link {
    id: ComponentId,
    href: String,
    rel: String,
}

impl Link {
    /// Link with an explicit relation.
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            href: href.into(),
            rel: rel.into(),
        }
    }

    /// Stylesheet link.
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self::new(href, "stylesheet")
    }

    /// Relation of this link.
    pub fn rel(&self) -> &str {
        &self.rel
    }
}

impl Component for Link {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Link
    }

    fn write_html(&self, out: &mut String, _ctx: &mut RenderContext) -> UiResult<()> {
        out.push_str(&format!(
            "<link{}{}>",
            attr("href", &self.href),
            attr("rel", &self.rel)
        ));
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum ScriptBody {
    Source(String),
    Inline(String),
}

#[derive(Debug, Clone)]
/// `<script>` include, either external or inline.
pub struct Script {
    id: ComponentId,
    body: ScriptBody,
}

impl Script {
    /// External script loaded from `src`.
    pub fn src(src: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            body: ScriptBody::Source(src.into()),
        }
    }

    /// Inline script body. The code is emitted verbatim except that every `</script`, in any
    /// letter case, has its slash escaped so the body cannot close the element.
    pub fn inline(code: impl Into<String>) -> Self {
        Self {
            id: ComponentId::next(),
            body: ScriptBody::Inline(code.into()),
        }
    }
}

impl Component for Script {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Script
    }

    fn write_html(&self, out: &mut String, _ctx: &mut RenderContext) -> UiResult<()> {
        match &self.body {
            ScriptBody::Source(src) => {
                out.push_str(&format!("<script{}></script>", attr("src", src)));
            }
            ScriptBody::Inline(code) => {
                out.push_str(&format!("<script>{}</script>", escape_script_close(code)));
            }
        }
        Ok(())
    }
}

fn escape_script_close(code: &str) -> String {
    let mut escaped = String::with_capacity(code.len());
    let mut rest = code;
    while let Some(at) = rest.find("</") {
        escaped.push_str(&rest[..at]);
        let after = &rest[at + 2..];
        let closes = after
            .get(..6)
            .is_some_and(|name| name.eq_ignore_ascii_case("script"));
        escaped.push_str(if closes { "<\\/" } else { "</" });
        rest = after;
    }
    escaped.push_str(rest);
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stylesheet_link() {
        assert_eq!(
            Link::stylesheet("/app.css").render().unwrap(),
            "<link href=\"/app.css\" rel=\"stylesheet\">"
        );
    }

    #[test]
    fn scripts_render_external_and_inline() {
        assert_eq!(
            Script::src("/app.js").render().unwrap(),
            "<script src=\"/app.js\"></script>"
        );
        assert_eq!(
            Script::inline("let s = '</script>';").render().unwrap(),
            "<script>let s = '<\\/script>';</script>"
        );
    }

    #[test]
    fn inline_script_cannot_close_itself_in_any_case() {
        assert_eq!(
            Script::inline("var s = '</SCRIPT><img src=x onerror=alert(1)>';")
                .render()
                .unwrap(),
            "<script>var s = '<\\/SCRIPT><img src=x onerror=alert(1)>';</script>"
        );
        assert_eq!(
            Script::inline("a('</Script >'); b('</sCrIpT');").render().unwrap(),
            "<script>a('<\\/Script >'); b('<\\/sCrIpT');</script>"
        );
    }

    #[test]
    fn inline_script_keeps_other_closing_tags() {
        assert_eq!(
            Script::inline("el.innerHTML = '<b>x</b></scr';").render().unwrap(),
            "<script>el.innerHTML = '<b>x</b></scr';</script>"
        );
    }
}
