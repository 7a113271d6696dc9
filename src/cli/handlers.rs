use std::error::Error;
use std::path::PathBuf;

use crate::board::Board;
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::storage::{self, DATA_DIR_NAME, FileStorage};
use crate::model::bucket::Bucket;
use crate::model::config::Config;
use crate::model::label::PALETTE;
use crate::model::task::TaskId;
use crate::ops::MoveRequest;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let data_dir = cli.data_dir;

    match cli.command {
        // Init and the TUI are handled in main.rs
        None | Some(Commands::Init) => Ok(()),
        Some(Commands::Add(args)) => cmd_add(args, &data_dir),
        Some(Commands::Board) => cmd_board(&data_dir, json),
        Some(Commands::List(args)) => cmd_list(args, &data_dir, json),
        Some(Commands::Done(args)) => cmd_done(args, &data_dir),
        Some(Commands::Mv(args)) => cmd_mv(args, &data_dir),
        Some(Commands::Label(cmd)) => cmd_label(cmd, &data_dir, json),
    }
}

fn open_board(data_dir: &Option<String>) -> Result<(Board, Config), Box<dyn Error>> {
    let dir = storage::resolve_data_dir(data_dir.as_deref())?;
    let config = config_io::load_config(&dir)?;
    let board = Board::load(Box::new(FileStorage::new(dir)));
    Ok((board, config))
}

fn parse_bucket(raw: &str) -> Result<Bucket, Box<dyn Error>> {
    Ok(raw.parse::<Bucket>()?)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub fn cmd_init(data_dir: &Option<String>) -> Result<(), Box<dyn Error>> {
    let root = match data_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    let dir = root.join(DATA_DIR_NAME);
    if dir.is_dir() {
        println!("already a quad board: {}", dir.display());
        return Ok(());
    }
    std::fs::create_dir_all(&dir)?;
    config_io::write_default_config(&dir)?;
    println!("initialized quad board in {}", dir.display());
    Ok(())
}

fn cmd_add(args: AddArgs, data_dir: &Option<String>) -> Result<(), Box<dyn Error>> {
    let (mut board, _) = open_board(data_dir)?;
    let id = board.create_task(&args.title, args.label.as_deref())?;
    println!("added {} {}", id, args.title.trim());
    Ok(())
}

fn cmd_board(data_dir: &Option<String>, json: bool) -> Result<(), Box<dyn Error>> {
    let (board, config) = open_board(data_dir)?;
    let quadrants: Vec<(Bucket, Vec<&crate::model::task::Task>)> = Bucket::ALL
        .iter()
        .map(|&bucket| {
            let tasks = board
                .tasks
                .in_bucket(bucket)
                .into_iter()
                .filter(|t| !(config.board.hide_done && t.done))
                .collect();
            (bucket, tasks)
        })
        .collect();

    if json {
        let out = BoardJson {
            quadrants: quadrants
                .iter()
                .map(|(bucket, tasks)| QuadrantJson {
                    bucket: bucket.key(),
                    heading: bucket.heading(),
                    tasks: tasks.iter().map(|&t| t.into()).collect(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", board_text(&quadrants, config.board.title_width));
    }
    Ok(())
}

fn cmd_list(args: ListArgs, data_dir: &Option<String>, json: bool) -> Result<(), Box<dyn Error>> {
    let (board, config) = open_board(data_dir)?;
    let tasks: Vec<&crate::model::task::Task> = match args.bucket {
        Some(raw) => board.tasks.in_bucket(parse_bucket(&raw)?),
        None => board.tasks.tasks().iter().collect(),
    };

    if json {
        let out: Vec<TaskJson> = tasks.iter().map(|&t| t.into()).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for task in tasks {
            println!("{}", task_line(task, config.board.title_width));
        }
    }
    Ok(())
}

fn cmd_done(args: DoneArgs, data_dir: &Option<String>) -> Result<(), Box<dyn Error>> {
    let (mut board, _) = open_board(data_dir)?;
    if board.toggle_done(TaskId(args.id)) {
        let task = board.tasks.get(TaskId(args.id)).ok_or("task vanished")?;
        let state = if task.done { "done" } else { "not done" };
        println!("{} {} is now {}", task.id, task.title, state);
    } else {
        println!("no task with id {}", args.id);
    }
    Ok(())
}

fn cmd_mv(args: MvArgs, data_dir: &Option<String>) -> Result<(), Box<dyn Error>> {
    let (mut board, _) = open_board(data_dir)?;
    let bucket = parse_bucket(&args.bucket)?;
    let id = TaskId(args.id);
    let request = match args.at {
        Some(index) => MoveRequest::ToPosition {
            id,
            bucket,
            index: Some(index),
        },
        None => MoveRequest::ToBucket { id, bucket },
    };
    if board.apply(request)? {
        println!("moved {} to {}", args.id, bucket.key());
    } else {
        println!("nothing to move");
    }
    Ok(())
}

fn cmd_label(cmd: LabelCmd, data_dir: &Option<String>, json: bool) -> Result<(), Box<dyn Error>> {
    match cmd.action {
        LabelAction::Add { name, color } => {
            let (mut board, _) = open_board(data_dir)?;
            let color = color.as_deref().unwrap_or(PALETTE[0]);
            board.create_label(&name, color)?;
            println!("added label {} ({})", name.trim(), color);
            Ok(())
        }
        LabelAction::Rm { name } => {
            let (mut board, _) = open_board(data_dir)?;
            match board.delete_label(&name) {
                Some(cleared) => {
                    println!("removed label {name} ({cleared} task(s) unlabeled)");
                }
                None => println!("no label named {name}"),
            }
            Ok(())
        }
        LabelAction::List => {
            let (board, _) = open_board(data_dir)?;
            if json {
                let out: Vec<LabelJson> = board.labels.labels().map(|l| l.into()).collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for label in board.labels.labels() {
                    println!("{} {}", label.color, label.name);
                }
            }
            Ok(())
        }
        LabelAction::Palette => {
            for color in PALETTE {
                println!("{color}");
            }
            Ok(())
        }
    }
}
