use clap::Parser;
use miette::Result;
use polca_core::{evaluator::evaluate, parser};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, Emacs, IdeMenu,
    KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu,
    Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;

mod error_renderer;
mod highlighter;
mod lexer;

use error_renderer::render_parse_error;
use highlighter::PolishHighlighter;

/// polca - A Polish-notation integer calculator
#[derive(Parser, Debug)]
#[command(name = "polca")]
#[command(about = "Evaluate Polish-notation programs", long_about = None)]
struct Args {
    /// Print the parsed syntax tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Program to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let commands: Vec<String> = vec!["min".into(), "max".into(), "exit".into()];

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['-', '_']);
        completions.insert(commands.clone());
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(PolishHighlighter))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("polca".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn interpret_input(input: &str, debug_parse: bool) -> Result<()> {
    // Parse
    let tree = match parser::parse(input) {
        Ok(tree) => tree,
        Err(e) => {
            render_parse_error(input, &e);
            return Ok(());
        }
    };

    if debug_parse {
        println!("=== Parsed tree ===");
        println!("{:#?}", tree);
        println!();
    }

    // Evaluate; arithmetic errors are values and print as `Error: ...`.
    println!("{}", evaluate(&tree));

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use the RUST_LOG environment variable to control the log level.
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Check if we have a direct program argument
    if let Some(expr) = args.expression {
        interpret_input(&expr, args.debug_parse)?;
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);
    tracing::debug!(interactive = is_interactive, "selected input mode");

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline();

        println!("polca - Polish notation calculator (type 'exit', Ctrl+D or Ctrl+C to quit)");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    if buffer.trim() == "exit" {
                        return Ok(());
                    }
                    interpret_input(buffer.as_ref(), args.debug_parse)?;
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            if line.trim() == "exit" {
                return Ok(());
            }
            interpret_input(&line, args.debug_parse)?;
        }
    }

    Ok(())
}
