use std::path::PathBuf;

use cosmic_ui::config::{default_config_path, load_config};
use cosmic_ui::facade;
use cosmic_ui::{
    ButtonConfig, ButtonVariant, CardConfig, Document, InfoConfig, ModalConfig, TagConfig,
    TitleColor,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const COMPONENTS: [&str; 5] = ["button", "card", "modal", "info", "tag"];

/// Options of the `render` command.
#[derive(Debug, Default)]
struct RenderArgs {
    component: String,
    title: Option<String>,
    text: Option<String>,
    variant: Option<String>,
    color: Option<String>,
    json: bool,
    config: Option<PathBuf>,
}

fn parse_render_args(args: &[String]) -> Result<RenderArgs, String> {
    let mut iter = args.iter();
    let component = iter
        .next()
        .ok_or_else(|| "render needs a component name".to_string())?;
    if !COMPONENTS.contains(&component.as_str()) {
        return Err(format!(
            "Unknown component '{}' (expected one of: {})",
            component,
            COMPONENTS.join(", ")
        ));
    }

    let mut parsed = RenderArgs {
        component: component.clone(),
        ..RenderArgs::default()
    };

    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} needs a value", flag))
        };
        match flag.as_str() {
            "--title" => parsed.title = Some(value()?),
            "--text" => parsed.text = Some(value()?),
            "--variant" => parsed.variant = Some(value()?),
            "--color" => parsed.color = Some(value()?),
            "--config" => parsed.config = Some(PathBuf::from(value()?)),
            "--json" => parsed.json = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(parsed)
}

/// Builds the requested component into a fresh document and returns the
/// serialized body.
fn render(args: &RenderArgs) -> Result<String, serde_json::Error> {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config = load_config(&config_path);
    let doc = Document::with_paint(config.paint());
    let text = args.text.clone().unwrap_or_default();
    let title = args.title.clone().unwrap_or_else(|| "Cosmic UI".to_string());

    match args.component.as_str() {
        "button" => {
            let variant = args
                .variant
                .as_deref()
                .map(ButtonVariant::parse)
                .unwrap_or_default();
            let label = if text.is_empty() { title } else { text };
            let button = facade::create_button(&doc, ButtonConfig::new(label).variant(variant));
            doc.body().append_child(&button);
        }
        "card" => {
            let card = facade::create_card(&doc, CardConfig::new(text).title(title));
            doc.body().append_child(&card);
        }
        "modal" => {
            let modal = facade::create_modal(
                &doc,
                ModalConfig::new(title, text).button(ButtonConfig::primary("OK")),
            );
            facade::show_modal(&modal);
        }
        "info" => {
            let mut info = InfoConfig::new(text).title(title);
            if let Some(color) = args.color.as_deref() {
                match TitleColor::parse(color) {
                    Some(color) => info = info.title_color(color),
                    None => log::warn!("Unknown title color '{}', ignoring", color),
                }
            }
            let overlay = facade::create_info(&doc, info);
            doc.body().append_child(&overlay);
        }
        _ => {
            let tag = facade::create_tag(&doc, TagConfig::new(text).title(title));
            doc.body().append_child(&tag);
        }
    }

    let output = if args.json {
        serde_json::to_string_pretty(&doc.body().to_json())
    } else {
        Ok(doc.body().inner_html())
    };
    doc.dispose();
    output
}

fn print_help() {
    println!(
        "cosmic-ui {}
Render cosmic UI components as HTML

USAGE:
    cosmic-ui render <COMPONENT> [OPTIONS]
    cosmic-ui [-h | -v]

COMPONENTS:
    {}

OPTIONS:
    --title <TEXT>     Title or heading
    --text <MARKUP>    Body content (button label for buttons)
    --variant <NAME>   Button variant: default, primary, secondary, danger
    --color <NAME>     Info title color: yellow, green, blue, purple, golden-red
    --json             Print a JSON tree instead of HTML
    --config <PATH>    Config file to load
    -h, --help         Print this help message
    -v, --version      Print version information

ENVIRONMENT:
    RUST_LOG           Set log level (error, warn, info, debug, trace)

CONFIG:
    ~/.config/cosmic-ui/config.toml

EXAMPLES:
    cosmic-ui render modal --title Alert --text '<p>Hull breach</p>'
    RUST_LOG=debug cosmic-ui render button --variant danger --text Abort",
        VERSION,
        COMPONENTS.join(", ")
    );
}

fn init_logging() {
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    logger
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {:>5} {}] {}",
                chrono::Utc::now().to_rfc3339(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            print_help();
        }
        Some("-v") | Some("--version") => {
            println!("cosmic-ui {}", VERSION);
        }
        Some("render") => {
            init_logging();
            match parse_render_args(&args[1..]) {
                Ok(render_args) => {
                    log::debug!("rendering {:?}", render_args);
                    match render(&render_args) {
                        Ok(output) => println!("{}", output),
                        Err(e) => {
                            log::error!("Failed to serialize {}: {}", render_args.component, e);
                            std::process::exit(1);
                        }
                    }
                }
                Err(message) => {
                    eprintln!("{}", message);
                    eprintln!("Try 'cosmic-ui --help' for more information.");
                    std::process::exit(1);
                }
            }
        }
        Some(other) => {
            eprintln!("Unknown argument: {}", other);
            eprintln!("Try 'cosmic-ui --help' for more information.");
            std::process::exit(1);
        }
    }
}
