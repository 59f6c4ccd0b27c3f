pub type CmdResult<T> = careplug::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod new;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (careplug::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::New(args) => dispatch!(args, global, new),
    }
}
