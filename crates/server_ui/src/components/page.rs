use super::*;
use crate::config::AssetConfig;

/// Complete HTML document: baseline assets, caller resources, an optional menu bar and content.
pub struct Page {
    id: ComponentId,
    title: Option<String>,
    favicon: Option<String>,
    menu: Option<Menu>,
    content: Option<Node>,
    links: Vec<Node>,
    scripts: Vec<Node>,
    assets: AssetConfig,
    classes: ClassSet,
}

capabilities!(Page: classes);

impl Page {
    /// Empty page using the default CDN assets.
    pub fn new() -> Self {
        Self {
            id: ComponentId::next(),
            title: None,
            favicon: None,
            menu: None,
            content: None,
            links: Vec::new(),
            scripts: Vec::new(),
            assets: AssetConfig::default(),
            classes: ClassSet::new(),
        }
    }

    /// Document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Icon URL for the browser tab.
    pub fn with_favicon(mut self, href: impl Into<String>) -> Self {
        self.favicon = Some(href.into());
        self
    }

    /// Menu bar rendered at the top of the body.
    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menu = Some(menu);
        self
    }

    /// Main body content.
    pub fn with_content(mut self, content: impl IntoNode) -> Self {
        self.content = Some(content.into_node());
        self
    }

    /// Extra stylesheets and scripts, appended after the baseline assets of the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Type`] when a resource is neither a [`Link`] nor a [`Script`].
    pub fn with_resources(mut self, resources: Vec<Node>) -> UiResult<Self> {
        for resource in resources {
            match resource.kind() {
                ComponentKind::Link => self.links.push(resource),
                ComponentKind::Script => self.scripts.push(resource),
                other => {
                    return Err(UiError::type_error(format!(
                        "page resources must be Link or Script, got {}",
                        other.name()
                    )));
                }
            }
        }
        Ok(self)
    }

    /// Replaces the baseline asset URLs and document language.
    pub fn with_assets(mut self, assets: AssetConfig) -> Self {
        self.assets = assets;
        self
    }

    fn write_head(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        out.push_str("<head><meta charset=\"utf-8\">");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
        );
        out.push_str(&stylesheet(&self.assets.bootstrap_css));
        out.push_str(&stylesheet(&self.assets.icons_css));
        write_children(&self.links, out, ctx)?;
        out.push_str(&format!(
            "<script{}></script>",
            attr("src", &self.assets.bootstrap_js)
        ));
        write_children(&self.scripts, out, ctx)?;
        if let Some(favicon) = &self.favicon {
            out.push_str(&format!("<link{}{}>", attr("href", favicon), attr("rel", "icon")));
        }
        if let Some(title) = &self.title {
            out.push_str(&format!("<title>{}</title>", escape(title)));
        }
        out.push_str("</head>");
        Ok(())
    }
}

fn stylesheet(href: &str) -> String {
    format!("<link{}{}>", attr("href", href), attr("rel", "stylesheet"))
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Page {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Page
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext) -> UiResult<()> {
        let mut document = format!(
            "<!DOCTYPE html><html{}>",
            attr("lang", &self.assets.lang)
        );
        self.write_head(&mut document, ctx)?;

        let mut body = String::new();
        if let Some(menu) = &self.menu {
            menu.write_html(&mut body, ctx)?;
        }
        if let Some(content) = &self.content {
            content.write_html(&mut body, ctx)?;
        }
        document.push_str(&format!(
            "<body{}{}>{body}</body></html>",
            attr("id", self.id.to_string()),
            self.classes.attr()
        ));
        out.push_str(&document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{nodes, Separator, Text};

    #[test]
    fn non_resource_is_rejected() {
        let result = Page::new().with_resources(nodes![Link::stylesheet("/a.css"), Separator::new()]);
        assert!(matches!(
            result.err(),
            Some(UiError::Type(message)) if message.contains("Separator")
        ));
    }

    #[test]
    fn head_orders_baseline_then_caller_assets() {
        let page = Page::new()
            .with_title("Home & Away")
            .with_favicon("/favicon.ico")
            .with_resources(nodes![Script::src("/app.js"), Link::stylesheet("/app.css")])
            .unwrap();
        let html = page.render().unwrap();
        let defaults = AssetConfig::default();

        let position = |needle: &str| html.find(needle).unwrap();
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">"));
        assert!(position(&defaults.bootstrap_css) < position(&defaults.icons_css));
        assert!(position(&defaults.icons_css) < position("/app.css"));
        assert!(position("/app.css") < position(&defaults.bootstrap_js));
        assert!(position(&defaults.bootstrap_js) < position("/app.js"));
        assert!(position("/app.js") < position("/favicon.ico"));
        assert!(html.contains("<link href=\"/favicon.ico\" rel=\"icon\"><title>Home &amp; Away</title></head>"));
    }

    #[test]
    fn body_holds_menu_then_content() {
        let menu = Menu::new(None, Text::new("Brand"), vec![], nodes![]).unwrap();
        let content = Text::new("Welcome").as_paragraph();
        let expected = format!("{}{}", menu.render().unwrap(), content.render().unwrap());
        let page = Page::new().with_menu(menu).with_content(content);
        let html = page.render().unwrap();

        assert!(html.ends_with(&format!(
            "<body id=\"{}\">{expected}</body></html>",
            page.id()
        )));
    }

    #[test]
    fn asset_config_overrides_baseline() {
        let assets = AssetConfig {
            bootstrap_css: "/static/bs.css".to_string(),
            lang: "de".to_string(),
            ..AssetConfig::default()
        };
        let html = Page::new().with_assets(assets).render().unwrap();

        assert!(html.contains("<html lang=\"de\">"));
        assert!(html.contains("<link href=\"/static/bs.css\" rel=\"stylesheet\">"));
        assert_eq!(html.matches("<script").count(), 1);
    }
}
