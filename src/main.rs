use std::env;
use std::ffi::OsStr;

use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use trip_hours::input::Config;
use trip_hours::{check_plan, generate_report};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use std::path::PathBuf;

    use anyhow::Context as _;
    use log::error;
    use seahorse::Context;

    // seahorse actions are plain `fn(&Context)`, so the error handling
    // has to live inside the action instead of around it
    pub fn exit_on_error(context: &Context, action: fn(&Context) -> anyhow::Result<()>) {
        if let Err(e) = action(context) {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.context()
                .string_flag(name)
                .map(PathBuf::from)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn optional_path_flag(&self, name: &str) -> Option<PathBuf> {
            self.context().string_flag(name).ok().map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let plan = context.required_path_flag("plan")?;
    let plan = dunce::canonicalize(&plan).map_err(|e| anyhow::anyhow!(e))?;

    let mut config = Config::try_from_json_file(&plan)?;

    if let Some(preferences) = context.optional_path_flag("preferences") {
        config.preferences_file(&preferences)?;
    }

    if let Some(output) = context.optional_path_flag("output") {
        config.output(output);
    }

    let config = config.build();

    info!("finished building config");

    Ok(config)
}

fn check_action(context: &Context) {
    exit_on_error(context, |context| {
        let config = build_config(context)?;
        check_plan(&config)
    });
}

fn report_action(context: &Context) {
    exit_on_error(context, |context| {
        let config = build_config(context)?;
        generate_report(&config)
    });
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let check_command = Command::new("check")
        .usage(format!("{} check [args]", args[0]))
        .description("Audits a plan file and reports the findings.")
        .flag(Flag::new("plan", FlagType::String).description("Path to the plan json file."))
        .flag(
            Flag::new("preferences", FlagType::String)
                .description("[optional] Path to the preferences toml file."),
        )
        .action(check_action);

    let report_command = Command::new("report")
        .usage(format!("{} report [args]", args[0]))
        .description("Renders the plan as a day-by-day report with status badges.")
        .flag(Flag::new("plan", FlagType::String).description("Path to the plan json file."))
        .flag(
            Flag::new("preferences", FlagType::String)
                .description("[optional] Path to the preferences toml file."),
        )
        .flag(
            Flag::new("output", FlagType::String)
                .description("[optional] Path to the output file. Default: stdout"),
        )
        .action(report_action);

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command]", args[0]))
        .command(check_command)
        .command(report_command);

    app.run(args);
}
