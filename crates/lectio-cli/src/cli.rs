//! Command definitions and handlers.
//!
//! CLI argument structures carry the clap derives and convert into the core
//! parameter types via `From` impls, keeping the core crate free of CLI
//! framework concerns. The [`Cli`] struct owns the planner and renderer and
//! dispatches the parsed commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::{civil::Date, Zoned};
use lectio_core::{
    display::{Days, PlanSummaries},
    params::{
        CreateLocalPlan, CreatePresetPlan, CreateRemotePlan, DayRange, DeletePlan, Id,
        ImportIcsPlan, ListPlans, LocalPlanParameters, ReadingOrder, RemotePlanParameters,
        UpdateProgress,
    },
    presets, Planner, PresetProfile,
};

use crate::renderer::TerminalRenderer;

fn start_or_today(start: Option<Date>) -> Date {
    start.unwrap_or_else(|| Zoned::now().date())
}

/// Reading order accepted on the command line
#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Canonical book order
    #[default]
    Traditional,
    /// Deterministic progression through the selected books
    Chronological,
    /// Theme-driven selection
    Thematic,
    /// Historical ordering
    Historical,
}

impl From<OrderArg> for ReadingOrder {
    fn from(val: OrderArg) -> Self {
        match val {
            OrderArg::Traditional => ReadingOrder::Traditional,
            OrderArg::Chronological => ReadingOrder::Chronological,
            OrderArg::Thematic => ReadingOrder::Thematic,
            OrderArg::Historical => ReadingOrder::Historical,
        }
    }
}

/// Create a plan from the upstream generator site
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,
    /// First calendar date of the plan (defaults to today)
    #[arg(long)]
    pub start: Option<Date>,
    /// Number of reading days
    #[arg(long, default_value_t = 30)]
    pub days: u32,
    /// Reading order
    #[arg(long, value_enum, default_value_t = OrderArg::Traditional)]
    pub order: OrderArg,
    /// Book groups or explicit book names, comma-separated (e.g. "NT" or
    /// "Psalms,Proverbs")
    #[arg(long, value_delimiter = ',')]
    pub books: Vec<String>,
    /// Reading weekdays as numbers, comma-separated (1 = Monday .. 7 = Sunday)
    #[arg(long, value_delimiter = ',')]
    pub days_of_week: Vec<u8>,
    /// Allow Old/New Testament overlap
    #[arg(long)]
    pub overlap: bool,
    /// Reverse the reading order
    #[arg(long)]
    pub reverse: bool,
    /// Request reading statistics
    #[arg(long)]
    pub stats: bool,
    /// Add a daily psalm
    #[arg(long)]
    pub daily_psalm: bool,
    /// Add a daily proverb
    #[arg(long)]
    pub daily_proverb: bool,
}

impl From<CreatePlanArgs> for CreateRemotePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreateRemotePlan {
            name: val.name,
            start_date: start_or_today(val.start),
            parameters: RemotePlanParameters {
                total_days: val.days,
                order: val.order.into(),
                books: val.books,
                days_of_week: val.days_of_week,
                overlap_ot_nt: val.overlap,
                reverse: val.reverse,
                stats: val.stats,
                daily_psalm: val.daily_psalm,
                daily_proverb: val.daily_proverb,
            },
        }
    }
}

/// Generate a plan locally, without any network access
#[derive(Args)]
pub struct GeneratePlanArgs {
    /// Name of the plan
    pub name: String,
    /// First calendar date of the plan (defaults to today)
    #[arg(long)]
    pub start: Option<Date>,
    /// Number of reading days
    #[arg(long, default_value_t = 30)]
    pub days: u32,
    /// Reading order
    #[arg(long, value_enum, default_value_t = OrderArg::Traditional)]
    pub order: OrderArg,
    /// Book groups or explicit book names, comma-separated
    #[arg(long, value_delimiter = ',', default_value = "OT,NT")]
    pub books: Vec<String>,
    /// Append a daily psalm
    #[arg(long)]
    pub psalms: bool,
    /// Append a daily proverb
    #[arg(long)]
    pub proverbs: bool,
}

impl From<GeneratePlanArgs> for CreateLocalPlan {
    fn from(val: GeneratePlanArgs) -> Self {
        CreateLocalPlan {
            name: val.name,
            start_date: start_or_today(val.start),
            parameters: LocalPlanParameters {
                total_days: val.days,
                order: val.order.into(),
                books: val.books,
                include_psalms: val.psalms,
                include_proverbs: val.proverbs,
            },
        }
    }
}

/// Create a plan from a named preset
#[derive(Args)]
pub struct PresetPlanArgs {
    /// Preset identifier (see `lectio plan presets`)
    pub slug: String,
    /// First calendar date of the plan (defaults to today)
    #[arg(long)]
    pub start: Option<Date>,
    /// Daily reading budget in minutes
    #[arg(long, default_value_t = 30)]
    pub minutes: u32,
    /// Free-form spiritual goal recorded with the plan
    #[arg(long)]
    pub goal: Option<String>,
}

impl From<PresetPlanArgs> for CreatePresetPlan {
    fn from(val: PresetPlanArgs) -> Self {
        CreatePresetPlan {
            slug: val.slug,
            start_date: start_or_today(val.start),
            profile: PresetProfile {
                minutes_per_day: val.minutes,
                goal: val.goal,
            },
        }
    }
}

/// Import a plan from an ICS calendar
#[derive(Args)]
pub struct ImportPlanArgs {
    /// Name of the plan
    pub name: String,
    /// ICS source: an http(s) URL or a local file path
    pub source: String,
}

/// List all plans
#[derive(Args)]
pub struct ListPlansArgs {
    /// Show only completed plans
    #[arg(long)]
    pub completed: bool,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            completed: val.completed,
        }
    }
}

/// Show details of a specific plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a plan from the upstream generator site
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Generate a plan locally, without any network access
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// Create a plan from a named preset
    Preset(PresetPlanArgs),
    /// Import a plan from an ICS calendar (URL or file)
    #[command(alias = "i")]
    Import(ImportPlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
    /// List the available presets
    Presets,
}

/// List the days of a plan
#[derive(Args)]
pub struct ListDaysArgs {
    /// ID of the plan
    pub plan_id: u64,
    /// First day index to show (inclusive)
    #[arg(long)]
    pub from: Option<u32>,
    /// Last day index to show (inclusive)
    #[arg(long)]
    pub to: Option<u32>,
}

impl From<ListDaysArgs> for DayRange {
    fn from(val: ListDaysArgs) -> Self {
        DayRange {
            plan_id: val.plan_id,
            from: val.from,
            to: val.to,
        }
    }
}

/// Mark a reading day as completed
#[derive(Args)]
pub struct CompleteDayArgs {
    /// ID of the plan
    pub plan_id: u64,
    /// 1-based day index within the plan
    pub day_index: u32,
    /// Notes to record with the day
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<CompleteDayArgs> for UpdateProgress {
    fn from(val: CompleteDayArgs) -> Self {
        UpdateProgress {
            plan_id: val.plan_id,
            day_index: val.day_index,
            completed: true,
            notes: val.notes,
        }
    }
}

/// Mark a reading day as not completed
#[derive(Args)]
pub struct ResetDayArgs {
    /// ID of the plan
    pub plan_id: u64,
    /// 1-based day index within the plan
    pub day_index: u32,
}

impl From<ResetDayArgs> for UpdateProgress {
    fn from(val: ResetDayArgs) -> Self {
        UpdateProgress {
            plan_id: val.plan_id,
            day_index: val.day_index,
            completed: false,
            notes: None,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// List the days of a plan
    #[command(aliases = ["l", "ls"])]
    List(ListDaysArgs),
    /// Mark a reading day as completed
    #[command(alias = "c")]
    Complete(CompleteDayArgs),
    /// Mark a reading day as not completed
    #[command(alias = "r")]
    Reset(ResetDayArgs),
}

/// Command dispatcher owning the planner and the terminal renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command dispatcher.
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Handle a `plan` subcommand.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let params: CreateRemotePlan = args.into();
                let plan = self
                    .planner
                    .create_remote_plan(&params)
                    .await
                    .context("Failed to create plan from the generator site")?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Generate(args) => {
                let params: CreateLocalPlan = args.into();
                let plan = self
                    .planner
                    .create_local_plan(&params)
                    .await
                    .context("Failed to generate plan")?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Preset(args) => {
                let params: CreatePresetPlan = args.into();
                let plan = self
                    .planner
                    .create_preset_plan(&params)
                    .await
                    .context("Failed to create plan from preset")?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Import(args) => self.import_plan(args).await,
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => {
                let params: Id = args.into();
                match self
                    .planner
                    .get_plan(&params)
                    .await
                    .context("Failed to load plan")?
                {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self
                        .renderer
                        .render(&format!("Plan with ID {} not found.\n", params.id)),
                }
            }
            PlanCommands::Delete(args) => {
                let params: DeletePlan = args.into();
                self.planner
                    .delete_plan(&params)
                    .await
                    .context("Failed to delete plan")?;
                self.renderer
                    .render(&format!("Deleted plan {}.\n", params.id))
            }
            PlanCommands::Presets => {
                let mut output = String::from("# Available presets\n\n");
                for preset in presets::PRESETS {
                    output.push_str(&preset.to_string());
                }
                self.renderer.render(&output)
            }
        }
    }

    /// Handle a `day` subcommand.
    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::List(args) => {
                let params: DayRange = args.into();
                let days = self
                    .planner
                    .get_days(&params)
                    .await
                    .context("Failed to load days")?;
                self.renderer.render(&Days(days).to_string())
            }
            DayCommands::Complete(args) => self.update_day(args.into()).await,
            DayCommands::Reset(args) => self.update_day(args.into()).await,
        }
    }

    /// List plans as summaries.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self
            .planner
            .list_plans(params)
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&PlanSummaries(summaries).to_string())
    }

    async fn import_plan(&self, args: ImportPlanArgs) -> Result<()> {
        let plan = if args.source.starts_with("http://") || args.source.starts_with("https://") {
            self.planner
                .import_ics_plan(&ImportIcsPlan {
                    name: args.name,
                    url: args.source,
                })
                .await
                .context("Failed to import ICS calendar from URL")?
        } else {
            let text = std::fs::read_to_string(&args.source)
                .with_context(|| format!("Failed to read ICS file '{}'", args.source))?;
            self.planner
                .import_ics_text(&args.name, &args.source, &text)
                .await
                .context("Failed to import ICS calendar")?
        };
        self.renderer.render(&plan.to_string())
    }

    async fn update_day(&self, params: UpdateProgress) -> Result<()> {
        let (day, stats) = self
            .planner
            .update_progress(&params)
            .await
            .context("Failed to update day progress")?;
        let mut output = day.to_string();
        output.push_str(&format!("Progress: {stats}\n"));
        self.renderer.render(&output)
    }
}
