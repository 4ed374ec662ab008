//! Gallery page exercising every `server_ui` component.
//!
//! The gallery is the reference surface for reviewing markup changes: each component family is
//! rendered in its common configurations on a single Bootstrap page.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::path::PathBuf;

use serde_json::json;
use server_ui::prelude::*;

/// Parsed `ui_showcase` invocation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ShowcaseArgs {
    /// TOML file overriding the baseline asset URLs.
    pub assets: Option<PathBuf>,
    /// Output file; stdout when absent.
    pub out: Option<PathBuf>,
}

/// What the binary should do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShowcaseCommand {
    /// Render the gallery.
    Render(ShowcaseArgs),
    /// Print usage.
    Help,
}

/// Parse raw command-line arguments (without the program name).
pub fn parse_args(args: Vec<String>) -> Result<ShowcaseCommand, String> {
    let mut parsed = ShowcaseArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--assets" => {
                let path = args.next().ok_or("--assets requires a path")?;
                parsed.assets = Some(PathBuf::from(path));
            }
            "--out" => {
                let path = args.next().ok_or("--out requires a path")?;
                parsed.out = Some(PathBuf::from(path));
            }
            "help" | "--help" | "-h" => return Ok(ShowcaseCommand::Help),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(ShowcaseCommand::Render(parsed))
}

/// Print the usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: ui_showcase [--assets <assets.toml>] [--out <file.html>]\n\
         \n\
         Options:\n\
           --assets <path>   Override Bootstrap/Icons asset URLs from a TOML file\n\
           --out <path>      Write the page to a file instead of stdout\n"
    );
}

fn heading(text: &str) -> UiResult<Text> {
    Ok(Text::new(text).as_heading(2)?.mt(4).mb(3))
}

fn leaves() -> UiResult<Panel> {
    let mut badges = Vec::new();
    for category in Category::ALL {
        badges.push(Badge::new(category.token()).with_category(category).me(1).into_node());
    }
    Ok(Panel::new(nodes![
        heading("Text and media")?,
        Text::new("Paragraph with default styling.").as_paragraph(),
        Text::new("Strong, small and monospace")
            .as_strong()
            .as_monospace()
            .as_primary(),
        Icon::new("star-fill").as_warning().ms(2),
        Separator::new(),
        Image::new("https://picsum.photos/120/80")
            .with_alt("Placeholder")
            .as_thumbnail(),
        Panel::new(badges).mt(2),
    ]))
}

fn buttons(dialog: &Dialog, details: &Panel) -> UiResult<Panel> {
    let mut row = Vec::new();
    for category in Category::ALL {
        row.push(
            Button::new(category.token())
                .with_category(category)
                .me(1)
                .into_node(),
        );
    }
    Ok(Panel::new(nodes![
        heading("Buttons and anchors")?,
        Panel::new(row).mb(2),
        Panel::new(nodes![
            Button::new("Outline").as_success().as_outline().me(1),
            Button::new("Small").as_secondary().with_size(ButtonSize::Small).me(1),
            Button::new("Disabled").as_dark().as_disabled().me(1),
            Button::new("Open dialog").toggle(dialog).as_primary().me(1),
            Button::new("Details").collapse(details).as_info().me(1),
            Anchor::new("Anchor link").link("#gallery").as_danger(),
        ])
        .justify_content("start")?
        .align_items("center")?,
    ]))
}

fn data() -> UiResult<Panel> {
    let list = List::new(nodes![
        ListItem::new("Inbox")
            .with_description("12 unread")
            .with_marker("now")
            .as_active(),
        ListItem::new("Archive").link("#archive"),
        ListItem::new("Spam").as_disabled(),
    ])?;

    let table = Table::new(
        ["Service", "Status", "Latency (ms)"],
        vec![
            vec![json!("api"), json!("up"), json!(42)],
            vec![json!("worker"), json!("degraded"), json!(380)],
            vec![json!("mailer"), json!(null), json!(null)],
        ],
    )
    .as_striped()
    .as_compact()
    .with_value_transform(1, |status| match status.as_str() {
        Some("up") => Badge::new("up").as_success().into(),
        Some(other) => Badge::new(other).as_warning().into(),
        None => "unknown".into(),
    })?
    .with_row_classes(2, |latency| {
        if latency.as_u64().is_some_and(|millis| millis > 250) {
            "table-warning".to_string()
        } else {
            String::new()
        }
    })?;

    let deck = Deck::new(nodes![
        Card::new("Starter")
            .with_description("For side projects.")
            .with_actions(nodes![Button::new("Choose").as_primary()]),
        Card::new("Team")
            .with_description("For growing teams.")
            .with_marker("most popular")
            .as_primary()
            .as_outline(),
        Card::new("Enterprise").with_description("For everyone else."),
    ])?
    .with_columns(3);

    let tabs = Navigation::new()
        .as_tabs()
        .append("List", list, true)
        .append("Table", table, false)
        .append("Cards", deck, false);

    Ok(Panel::new(nodes![heading("Data display")?, tabs]))
}

fn forms() -> UiResult<Panel> {
    let form = Form::new(
        "/showcase/submit",
        nodes![
            TextInput::new("name")
                .with_label("Name")
                .with_placeholder("Ada Lovelace")
                .as_required(),
            TextInput::new("email")
                .with_label("Email")
                .as_email()?
                .with_tip("We never share it."),
            TextInput::new("bio")
                .with_label("Bio")
                .label_on_top()
                .with_multirows(3)?,
            NumericInput::new("age")
                .with_label("Age")
                .with_range(0, 150)?
                .with_step(1)?,
            SelectInput::new("plan", [("free", "Free"), ("team", "Team")])
                .with_label("Plan")
                .with_selected("team"),
            SelectInput::new("size", [("s", "Small"), ("l", "Large")])
                .with_label("Size")
                .as_radio(),
            CheckboxInput::new("terms").with_label("Accept terms"),
            CheckboxInput::new("alerts")
                .with_label("Alerts")
                .as_switch()
                .with_checked(true),
            FileInput::new("avatar").with_label("Avatar").with_accept("image/*"),
            HiddenInput::new("origin", "showcase"),
            JsonInput::new("meta", &json!({ "version": 1 }))?,
            Button::new("Submit").submit().as_primary(),
        ],
    );
    Ok(Panel::new(nodes![heading("Forms")?, form]))
}

/// Builds the gallery page.
pub fn build_gallery(assets: AssetConfig) -> UiResult<Page> {
    let dialog = Dialog::new("Dialog title", Text::new("Dialogs hold arbitrary content."))
        .as_centered()
        .with_actions(nodes![
            Button::new("Close").dismiss().as_secondary(),
            Button::new("Confirm").as_primary(),
        ]);
    let details = Panel::new(nodes![Text::new(
        "Collapsed content revealed by the Details button."
    )])
    .add_classes("collapse")
    .as_light()
    .p(3);
    let toast = Toast::new(Text::new("Saved successfully."))
        .with_title("Status")
        .with_hide_delay(0)?
        .as_success();

    let menu = Menu::new(
        None,
        Text::new("server_ui").as_strong(),
        vec![
            Anchor::new("Gallery").link("#gallery"),
            Anchor::new("Bootstrap").link("https://getbootstrap.com"),
        ],
        nodes![Button::new("Sign in").as_light().as_outline()],
    )?
    .as_dark();

    let content = Panel::new(nodes![
        leaves()?,
        buttons(&dialog, &details)?,
        details,
        data()?,
        forms()?,
        heading("Overlays")?,
        toast,
        dialog,
    ])
    .add_classes("container")
    .py(3);

    Page::new()
        .with_title("server_ui showcase")
        .with_assets(assets)
        .with_menu(menu)
        .with_content(content)
        .with_resources(nodes![Script::inline(
            "document.addEventListener('DOMContentLoaded',()=>document.querySelectorAll('.toast').forEach(t=>bootstrap.Toast.getOrCreateInstance(t).show()));"
        )])
}

/// Renders the gallery page to HTML.
pub fn render_gallery(assets: AssetConfig) -> UiResult<String> {
    build_gallery(assets)?.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paths_and_help() {
        assert_eq!(
            parse_args(vec![
                "--assets".to_string(),
                "assets.toml".to_string(),
                "--out".to_string(),
                "gallery.html".to_string(),
            ]),
            Ok(ShowcaseCommand::Render(ShowcaseArgs {
                assets: Some(PathBuf::from("assets.toml")),
                out: Some(PathBuf::from("gallery.html")),
            }))
        );
        assert_eq!(parse_args(vec!["-h".to_string()]), Ok(ShowcaseCommand::Help));
        assert_eq!(
            parse_args(Vec::new()),
            Ok(ShowcaseCommand::Render(ShowcaseArgs::default()))
        );
    }

    #[test]
    fn rejects_missing_values_and_unknown_flags() {
        assert!(parse_args(vec!["--out".to_string()]).is_err());
        assert!(parse_args(vec!["--verbose".to_string()])
            .unwrap_err()
            .contains("--verbose"));
    }

    #[test]
    fn gallery_renders_every_family() {
        let html = render_gallery(AssetConfig::default()).expect("gallery renders");

        for needle in [
            "navbar",
            "badge",
            "btn-outline-success",
            "list-group",
            "<table",
            "row-cols-md-3",
            "nav-tabs",
            "<form",
            "form-switch",
            "type=\"file\"",
            "modal fade",
            "toast",
            "data-bs-autohide=\"false\"",
        ] {
            assert!(html.contains(needle), "gallery is missing {needle}");
        }
    }
}
