use crossterm::style::Stylize;
use shorthand_core::core::glyphs::{Axis, Bend, CircleSize, Length, Primitive, StrokeClass};
use shorthand_core::core::parser;
use shorthand_core::{RecognitionEngine, RecognitionRequest};
use std::io::{stdin, stdout, Write};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let engine = RecognitionEngine::new();

    println!("Gregg Shorthand Decoder. Type stroke commands, 'help', or 'exit'.");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        stdout().flush().expect("stdout flush");

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "help" => print_glyph_table(),
            "" => {}
            line => {
                let tokens = parser::parse(line);
                if tokens.is_empty() {
                    println!("{}", "No recognizable stroke commands in that line.".yellow());
                    continue;
                }
                println!("Strokes: {}", parser::render(&tokens));

                let request = RecognitionRequest::from_primitives(tokens);
                match engine.recognize(&request).await {
                    Ok(result) => {
                        let label = format!(
                            "{}  ({:.0}% confidence)",
                            result.prediction,
                            result.confidence * 100.0
                        );
                        let styled = if result.confidence >= 0.85 {
                            label.green()
                        } else if result.is_readable() {
                            label.yellow()
                        } else {
                            label.red()
                        };
                        println!("Decoded: {}", styled);
                        println!("  {}", result.explanation);
                    }
                    Err(e) => eprintln!("{} {}", "[ERROR]".red(), e),
                }
            }
        }
    }
}

fn print_glyph_table() {
    println!("\nStroke commands:");
    for p in Primitive::ALL {
        println!("  {:8} {}", p.command(), describe(p.class()));
    }
}

fn describe(class: StrokeClass) -> &'static str {
    match class {
        StrokeClass::Line { axis: Axis::Downward, length: Length::Short } => "short downward line",
        StrokeClass::Line { axis: Axis::Downward, length: Length::Long } => "long downward line",
        StrokeClass::Line { axis: Axis::Horizontal, length: Length::Short } => "short horizontal line",
        StrokeClass::Line { axis: Axis::Horizontal, length: Length::Long } => "long horizontal line",
        StrokeClass::Curve { bend: Bend::Left, length: Length::Short } => "short left curve",
        StrokeClass::Curve { bend: Bend::Left, length: Length::Long } => "long left curve",
        StrokeClass::Curve { bend: Bend::Right, length: Length::Short } => "short right curve",
        StrokeClass::Curve { bend: Bend::Right, length: Length::Long } => "long right curve",
        StrokeClass::Curve { bend: Bend::Upward, length: Length::Short } => "short upward curve",
        StrokeClass::Curve { bend: Bend::Upward, length: Length::Long } => "long upward curve",
        StrokeClass::Circle { size: CircleSize::Small } => "small circle",
        StrokeClass::Circle { size: CircleSize::Large } => "large circle",
        StrokeClass::Tick => "tick",
        StrokeClass::Gap => "word gap",
    }
}
