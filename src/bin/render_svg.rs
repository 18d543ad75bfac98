use std::env;
use std::fs;
use std::process;

use barpath::{encode, render, svg, BarcodeProps, Registry, Viewport};
use log::{error, info};

fn main() {
    env_logger::init();

    let mut props_path: Option<String> = None;
    let mut overrides: Vec<(String, String)> = Vec::new();
    let mut print_paths = false;
    let mut out_path: Option<String> = None;

    // Аргументы:
    // --props p.json  --value 1101  --format MODULES  --text "..."  --width 300  --height 100
    // --line-color #000  --text-color #000  --background #fff  --font System  --paths  --out a.svg
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--paths" => print_paths = true,
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--props" => props_path = Some(flag_value(&a, args.next())),
            "--out" => out_path = Some(flag_value(&a, args.next())),
            "--value" | "--format" | "--text" | "--width" | "--height" | "--line-color"
            | "--text-color" | "--background" | "--font" => {
                let v = flag_value(&a, args.next());
                overrides.push((a.clone(), v));
            }
            other => usage_error(&format!("Неизвестный аргумент: {other}")),
        }
    }

    let mut props = match &props_path {
        Some(path) => match BarcodeProps::from_json_file(path) {
            Ok(p) => p,
            Err(e) => {
                error!("{e}");
                eprintln!("{e}");
                process::exit(1);
            }
        },
        // без файла пропсов — единственный встроенный формат
        None => BarcodeProps {
            format: encode::modules::FORMAT.to_string(),
            ..BarcodeProps::default()
        },
    };
    for (flag, v) in overrides {
        apply_flag(&mut props, &flag, v);
    }

    // В CLI хоста нет: контейнер = width из пропсов, 0 — по 2px на модуль.
    let viewport = (props.width <= 0.0).then(|| {
        let modules = props.value.as_deref().map_or(0, str::len);
        Viewport::new(modules as f64 * 2.0 + 2.0 * barpath::props::PADDING_X)
    });

    let registry = Registry::with_builtin();
    let rendering = match render(&registry, &props, viewport) {
        Ok(r) => r,
        Err(e) => {
            error!("{e:?}");
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let output = if print_paths {
        let mut s = rendering.paths().join("\n");
        s.push('\n');
        s
    } else {
        svg::to_document(&rendering)
    };

    match out_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, output) {
                eprintln!("Ошибка записи {path}: {e}");
                process::exit(1);
            }
            info!("{} bars written to {path}", rendering.bars.len());
        }
        None => print!("{output}"),
    }
}

fn apply_flag(props: &mut BarcodeProps, flag: &str, v: String) {
    match flag {
        "--value" => props.value = Some(v),
        "--format" => props.format = v,
        "--text" => props.text = Some(v),
        "--width" => props.width = parse_number(flag, &v),
        "--height" => props.height = parse_number(flag, &v),
        "--line-color" => props.line_color = v,
        "--text-color" => props.text_color = v,
        "--background" => props.background = v,
        "--font" => props.text_font = v,
        _ => usage_error(&format!("Неизвестный аргумент: {flag}")),
    }
}

fn flag_value(flag: &str, v: Option<String>) -> String {
    match v {
        Some(v) => v,
        None => usage_error(&format!("{flag}: нет значения")),
    }
}

fn parse_number(flag: &str, v: &str) -> f64 {
    match v.parse() {
        Ok(n) => n,
        Err(_) => usage_error(&format!("{flag}: ожидалось число, получено {v:?}")),
    }
}

fn usage_error(msg: &str) -> ! {
    eprintln!("{msg}");
    print_help();
    process::exit(2);
}

fn print_help() {
    eprintln!(
        r#"Использование:
  cargo run --bin render_svg -- [--props <file.json>] [--value <v>] [--format <name>] [--text <caption>]
                                [--width <px>] [--height <px>] [--line-color <c>] [--text-color <c>]
                                [--background <c>] [--font <name>] [--paths] [--out <file.svg>]

Встроенный формат только MODULES (значение уже в модулях '0'/'1'); он же
формат по умолчанию. В файле --props без "format" действует CODE128, которого
во встроенном реестре нет, так что укажите формат явно.
Флаги перекрывают значения из --props.

Примеры:
  cargo run --bin render_svg -- --value 1101 --format MODULES --width 230
  cargo run --bin render_svg -- --value 110100111 --format MODULES --paths
"#
    );
}
