use std::env;

use syncfile_base::{syncfile_message_error, BridgePath, Result};
use syncfile_bridge::{FileAccess, StdBridgeInstaller};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Print the decoded text content of a file.
    Cat(BridgePath),
    /// Print whether a file or directory exists.
    Exists(BridgePath),
    /// Print the binary size of a file in bytes.
    Size(BridgePath),
}

fn parse_command(args: &[String]) -> Result<Command> {
    let (operation, path) = match args {
        [_, operation, path] => (operation.as_str(), BridgePath::from(path.as_str())),
        _ => return Err(syncfile_message_error!("usage: syncfile <cat|exists|size> <path>")),
    };
    match operation {
        "cat" => Ok(Command::Cat(path)),
        "exists" => Ok(Command::Exists(path)),
        "size" => Ok(Command::Size(path)),
        other => Err(syncfile_message_error!(
            "unknown operation '{other}', expected cat, exists, or size"
        )),
    }
}

fn run(access: &FileAccess, command: &Command) -> Result<String> {
    match command {
        Command::Cat(path) => {
            info!(%path, "reading text file");
            let text = access.read_text_file_sync(path)?;
            Ok(text.as_str().to_owned())
        }
        Command::Exists(path) => {
            info!(%path, "checking existence");
            let present = access.exists_sync(path)?;
            Ok(present.to_string())
        }
        Command::Size(path) => {
            info!(%path, "reading binary file");
            let bytes = access.read_binary_file_sync(path)?;
            Ok(format!("{} bytes", bytes.len()))
        }
    }
}

fn main() {
    if let Err(error) = syncfile_base::logging::init_logging() {
        eprintln!("{error}");
        std::process::exit(1);
    }

    let args = env::args().collect::<Vec<_>>();
    info!(
        revision = syncfile_base::project_revision(),
        "running syncfile CLI"
    );

    let outcome = parse_command(&args).and_then(|command| {
        let access = FileAccess::with_installer(StdBridgeInstaller::new_at_cwd());
        run(&access, &command)
    });
    match outcome {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}
