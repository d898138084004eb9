use anyhow::Context;
use clap::Parser;
use contactmgr::cli::{
    run_add, run_delete, run_favorites, run_list, run_search, run_set_favorite, run_show,
    run_update, Cli, Commands,
};
use contactmgr::config::resolve_db_path;
use contactmgr::db::SharedStore;
use contactmgr::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = resolve_db_path(cli.db)?;
    let store = SharedStore::open_at(path.clone())
        .await
        .with_context(|| format!("Could not open contacts at {}", path.display()))?;

    match cli.command {
        Commands::List(args) => run_list(&store, args.json).await?,
        Commands::Favorites(args) => run_favorites(&store, args.json).await?,
        Commands::Search(args) => {
            run_search(&store, &args.query, args.case_sensitive, args.json).await?
        }
        Commands::Show(args) => run_show(&store, args.id, args.json).await?,
        Commands::Add(args) => run_add(&store, args).await?,
        Commands::Update(args) => run_update(&store, args).await?,
        Commands::Favorite(args) => run_set_favorite(&store, args.id, true).await?,
        Commands::Unfavorite(args) => run_set_favorite(&store, args.id, false).await?,
        Commands::Delete(args) => run_delete(&store, args.id, args.force).await?,
    }

    Ok(())
}
