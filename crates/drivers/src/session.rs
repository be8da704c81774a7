use std::io::{self, BufRead, Write};

use photo_gallery_adapters::{present_gallery_row, present_pending};
use photo_gallery_application::{
    CommitPendingCommand, DiscardPendingCommand, GalleryStore, LoadGalleryCommand,
    PickImageCommand, RemoveImageCommand,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Pick(String),
    Save,
    Discard,
    Remove(usize),
    List,
    Pending,
    Help,
    Quit,
}

pub fn parse_session_command(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((line, ""));

    match verb {
        "pick" => Ok(SessionCommand::Pick(rest.to_string())),
        "save" => Ok(SessionCommand::Save),
        "discard" => Ok(SessionCommand::Discard),
        "remove" => {
            if rest.is_empty() {
                return Err("missing gallery index".to_string());
            }
            rest.parse::<usize>()
                .map(SessionCommand::Remove)
                .map_err(|_| format!("invalid gallery index: {rest}"))
        }
        "list" => Ok(SessionCommand::List),
        "pending" => Ok(SessionCommand::Pending),
        "help" => Ok(SessionCommand::Help),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        other => Err(format!("unknown command: {other}")),
    }
}

/// Drives one gallery screen: loads the saved gallery, then applies one
/// command per input line until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut GalleryStore,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    store.load(LoadGalleryCommand);
    render_gallery(store, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_session_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(output, "{msg}")?;
                continue;
            }
        };

        match command {
            SessionCommand::Pick(source) => {
                match store.pick_image(PickImageCommand { source }) {
                    Ok(Some(pending)) => writeln!(output, "{}", present_pending(pending))?,
                    Ok(None) => writeln!(output, "pick cancelled")?,
                    Err(error) => writeln!(output, "pick failed: {error}")?,
                }
            }
            SessionCommand::Save => {
                if let Err(error) = store.commit_pending(CommitPendingCommand) {
                    writeln!(output, "save failed: {error}")?;
                    continue;
                }
                render_gallery(store, output)?;
            }
            SessionCommand::Discard => {
                store.discard_pending(DiscardPendingCommand);
                writeln!(output, "pending image discarded")?;
            }
            SessionCommand::Remove(index) => {
                if let Err(error) = store.remove(RemoveImageCommand { index }) {
                    writeln!(output, "remove failed: {error}")?;
                    continue;
                }
                render_gallery(store, output)?;
            }
            SessionCommand::List => render_gallery(store, output)?,
            SessionCommand::Pending => match store.pending() {
                Some(pending) => writeln!(output, "{}", present_pending(pending))?,
                None => writeln!(output, "no pending image")?,
            },
            SessionCommand::Help => print_session_help(output)?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

fn render_gallery<W: Write>(store: &GalleryStore, output: &mut W) -> io::Result<()> {
    let gallery = store.gallery();
    if gallery.is_empty() {
        return writeln!(output, "gallery is empty");
    }
    writeln!(output, "saved photos:")?;
    for (index, image) in gallery.iter().enumerate() {
        writeln!(output, "{}", present_gallery_row(index, image))?;
    }
    Ok(())
}

fn print_session_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "commands:")?;
    writeln!(output, "  pick [path]     preview an image (no path cancels)")?;
    writeln!(output, "  save            save the previewed image")?;
    writeln!(output, "  discard         drop the previewed image")?;
    writeln!(output, "  remove <index>  delete a saved image")?;
    writeln!(output, "  list            show saved images")?;
    writeln!(output, "  pending         show the previewed image")?;
    writeln!(output, "  quit")
}

#[cfg(test)]
mod tests {
    use photo_gallery_adapters::{
        ConsoleNotifier, FsImagePicker, InMemoryKeyValueStore, WalkdirLibraryScanner,
    };
    use tempfile::TempDir;

    use super::*;

    fn in_memory_store() -> GalleryStore {
        GalleryStore::new(
            Box::new(InMemoryKeyValueStore::default()),
            Box::new(FsImagePicker),
            Box::new(WalkdirLibraryScanner),
            Box::new(ConsoleNotifier),
        )
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_session_command("pick  /tmp/a.jpg "),
            Ok(SessionCommand::Pick("/tmp/a.jpg".to_string()))
        );
        assert_eq!(
            parse_session_command("pick"),
            Ok(SessionCommand::Pick(String::new()))
        );
        assert_eq!(
            parse_session_command("remove 2"),
            Ok(SessionCommand::Remove(2))
        );
        assert!(parse_session_command("remove").is_err());
        assert!(parse_session_command("remove -1").is_err());
        assert!(parse_session_command("dance").is_err());
    }

    #[test]
    fn session_saves_discards_and_removes() {
        let dir = TempDir::new().expect("tempdir");
        let first = dir.path().join("first.jpg");
        let second = dir.path().join("second.png");
        std::fs::write(&first, vec![0_u8; 2048]).expect("write");
        std::fs::write(&second, vec![0_u8; 10]).expect("write");

        let script = format!(
            "pick {}\nsave\npick {}\ndiscard\npending\nremove 3\nremove 0\nquit\nlist\n",
            first.display(),
            second.display()
        );
        let mut store = in_memory_store();
        let mut output = Vec::new();

        run_session(&mut store, script.as_bytes(), &mut output).expect("session");

        let output = String::from_utf8(output).expect("utf8");
        assert!(output.starts_with("gallery is empty\n"));
        assert!(output.contains("first.jpg (2.00 KB)"));
        assert!(output.contains("0\tfile://"));
        assert!(output.contains("pending image discarded\nno pending image\n"));
        assert!(output.contains("remove failed: gallery index 3 out of range for 1 images"));
        assert!(output.ends_with("gallery is empty\n"));
        assert!(store.gallery().is_empty());
        assert!(!store.has_pending());
    }

    #[test]
    fn save_without_pick_reports_error() {
        let mut store = in_memory_store();
        let mut output = Vec::new();

        run_session(&mut store, "save\npick\n".as_bytes(), &mut output).expect("session");

        let output = String::from_utf8(output).expect("utf8");
        assert!(output.contains("save failed: no pending image selected"));
        assert!(output.contains("pick cancelled"));
    }
}
