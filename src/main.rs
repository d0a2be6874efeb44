use loopcut::*;

fn reduce_to_text(maze: &mut Maze, args: &Args) -> Result<usize, ReduceError> {
    maze.reduce_with(|checkpoint, grid| {
        if args.verbose || !matches!(checkpoint, Checkpoint::LoopCut { .. }) {
            println!("\n{}", render::delimited(grid));
        }
    })
}

fn reduce_to_html(maze: &mut Maze, args: &Args) -> Result<usize, ReduceError> {
    let mut page: String = String::new();

    render::html_header(&mut page);

    let result: Result<usize, ReduceError> = maze.reduce_with(|checkpoint, grid| {
        let heading: String = match checkpoint {
            Checkpoint::Initial => "Starting".into(),
            Checkpoint::LoopCut { iteration } => format!("After loop break {iteration}"),
            Checkpoint::Final => "Final".into(),
        };

        if args.verbose || !matches!(checkpoint, Checkpoint::LoopCut { .. }) {
            render::svg_snapshot(&mut page, grid, &heading);
        }
    });

    render::html_footer(&mut page);
    print!("{page}");

    result
}

fn run(maze: &mut Maze, args: &Args) {
    let result: Result<usize, ReduceError> = if args.html {
        reduce_to_html(maze, args)
    } else {
        reduce_to_text(maze, args)
    };

    match result {
        Ok(loop_cuts) => eprintln!("Loop-free after {loop_cuts} cut(s)"),
        Err(error) => eprintln!("Reduction failed:\n{error:#?}"),
    }
}

fn main() {
    let args: Args = Args::parse();
    let input_file_path: &str = args.input_file_path("input/maze.txt");

    if let Err(error) =
        // SAFETY: This operation is unsafe, we're just hoping nobody else touches the file while
        // this program is executing
        unsafe {
            open_utf8_file(input_file_path, |input: &str| {
                match Maze::try_from(input) {
                    Ok(mut maze) => run(&mut maze, &args),
                    Err(error) => {
                        eprintln!("Failed to parse maze from \"{input_file_path}\":\n{error:#?}")
                    }
                }
            })
        }
    {
        eprintln!(
            "Encountered error {} when opening file \"{}\"",
            error, input_file_path
        );
    }
}
