mod config;
mod logging;
mod session;

use std::io::{self, Write};
use std::process::ExitCode;

use config::AppConfig;
use photo_gallery_adapters::{
    present_gallery_row, present_library_entry, present_pending, ConsoleNotifier, FsImagePicker,
    InMemoryKeyValueStore, SqliteKeyValueStore, SystemClock, TracingGalleryObserver,
    WalkdirLibraryScanner,
};
use photo_gallery_application::{
    BootstrapStorageCommand, BrowseLibraryCommand, CommitPendingCommand, GalleryStore,
    KeyValueStore, LoadGalleryCommand, PickImageCommand, RemoveImageCommand,
};

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::from_env();

    let mut store = build_gallery_store(&config);
    if let Err(error) = store.bootstrap_storage(BootstrapStorageCommand) {
        eprintln!("failed to bootstrap photo-gallery: {error}");
        return ExitCode::from(1);
    }

    let command = parse_command(&args);
    match run_command(command, &mut store, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_gallery_store(config: &AppConfig) -> GalleryStore {
    let storage: Box<dyn KeyValueStore> = if config.uses_in_memory_storage() {
        Box::new(InMemoryKeyValueStore::default())
    } else {
        Box::new(SqliteKeyValueStore::new(
            config.storage_path.clone(),
            Box::new(SystemClock),
        ))
    };

    let mut store = GalleryStore::new(
        storage,
        Box::new(FsImagePicker),
        Box::new(WalkdirLibraryScanner),
        Box::new(ConsoleNotifier),
    );
    store.subscribe(Box::new(TracingGalleryObserver));
    store
}

#[derive(Debug, Clone)]
enum Command {
    Session,
    List,
    Add { path: String },
    Remove { index: usize },
    Library { folder: Option<String> },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Session);
    }

    match args[1].as_str() {
        "session" => Ok(Command::Session),
        "list" => Ok(Command::List),
        "add" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing image path".to_string()));
            }
            Ok(Command::Add {
                path: args[2].clone(),
            })
        }
        "remove" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing gallery index".to_string()));
            }
            let index = args[2]
                .parse::<usize>()
                .map_err(|_| CommandError::Usage(format!("invalid gallery index: {}", args[2])))?;
            Ok(Command::Remove { index })
        }
        "library" => Ok(Command::Library {
            folder: args.get(2).cloned(),
        }),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    store: &mut GalleryStore,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Session => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session::run_session(store, stdin.lock(), &mut stdout)
                .and_then(|()| stdout.flush())
                .map_err(|error| CommandError::Runtime(format!("session failed: {error}")))
        }
        Command::List => {
            let gallery = store.load(LoadGalleryCommand);
            if gallery.is_empty() {
                println!("gallery is empty");
                return Ok(());
            }
            for (index, image) in gallery.iter().enumerate() {
                println!("{}", present_gallery_row(index, image));
            }
            Ok(())
        }
        Command::Add { path } => {
            store.load(LoadGalleryCommand);
            if !store.is_loaded() {
                return Err(CommandError::Runtime(
                    "add failed: saved gallery could not be loaded".to_string(),
                ));
            }
            let pending = store
                .pick_image(PickImageCommand { source: path })
                .map_err(|error| CommandError::Runtime(format!("add failed: {error}")))?
                .ok_or_else(|| CommandError::Usage("missing image path".to_string()))?;
            println!("{}", present_pending(pending));
            let gallery = store
                .commit_pending(CommitPendingCommand)
                .map_err(|error| CommandError::Runtime(format!("add failed: {error}")))?;
            println!("gallery now holds {} images", gallery.len());
            Ok(())
        }
        Command::Remove { index } => {
            store.load(LoadGalleryCommand);
            if !store.is_loaded() {
                return Err(CommandError::Runtime(
                    "remove failed: saved gallery could not be loaded".to_string(),
                ));
            }
            let gallery = store
                .remove(RemoveImageCommand { index })
                .map_err(|error| CommandError::Runtime(format!("remove failed: {error}")))?;
            println!("gallery now holds {} images", gallery.len());
            Ok(())
        }
        Command::Library { folder } => {
            let folder = folder.unwrap_or_else(|| config.library_dir.clone());
            let entries = store
                .browse_library(BrowseLibraryCommand { folder })
                .map_err(|error| CommandError::Runtime(format!("library failed: {error}")))?;
            if entries.is_empty() {
                println!("no images found");
                return Ok(());
            }
            for entry in entries {
                println!("{}", present_library_entry(&entry));
            }
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  photo-gallery [session]");
    println!("  photo-gallery list");
    println!("  photo-gallery add <image_path>");
    println!("  photo-gallery remove <index>");
    println!("  photo-gallery library [folder]");
}
