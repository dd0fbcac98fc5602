use clap::{Parser, Subcommand};
use fotovault::cli;
use fotovault::config::FotovaultConfig;

#[derive(Parser, Debug)]
#[command(name = "fotovault", about = "A personal photo album manager")]
struct Args {
    #[arg(long, env = "FOTOVAULT_WORKDIR", help = "Directory holding the album index")]
    workdir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all albums
    Albums,
    /// Create a new album
    CreateAlbum { name: String },
    /// Rename an existing album
    RenameAlbum { album_id: String, new_name: String },
    /// Delete an album and all of its photos
    DeleteAlbum { album_id: String },
    /// Delete every album
    DeleteAllAlbums,
    /// List the photos in an album
    Photos { album_id: String },
    /// Delete photos from an album by id
    DeletePhotos { album_id: String, photo_ids: Vec<String> },
    /// Upload image files into an album
    Upload { album_id: String, files: Vec<String> },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let config = match FotovaultConfig::new(args.workdir.as_deref()) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Albums => cli::list_albums(config).await,
        Command::CreateAlbum { name } => cli::create_album(config, &name).await,
        Command::RenameAlbum { album_id, new_name } => cli::rename_album(config, &album_id, &new_name).await,
        Command::DeleteAlbum { album_id } => cli::delete_album(config, &album_id).await,
        Command::DeleteAllAlbums => cli::delete_all_albums(config).await,
        Command::Photos { album_id } => cli::list_photos(config, &album_id).await,
        Command::DeletePhotos { album_id, photo_ids } => cli::delete_photos(config, &album_id, &photo_ids).await,
        Command::Upload { album_id, files } => cli::upload(config, &album_id, &files).await,
    }
}
