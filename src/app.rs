//! Text front end.
//!
//! `FitnessApp` renders the repository as plain text and drives a
//! line-oriented session: each input line is tokenized (double quotes group
//! words) and parsed with clap into a [`SessionCommand`].

use crate::achievements::Achievement;
use crate::goals::{GoalError, GoalToggle, GoalType};
use crate::metrics::{progress_bar, ProgressBand};
use crate::onboarding::{OnboardingStep, Tutorial};
use crate::quotes;
use crate::repository::DataRepository;
use crate::storage::config::AppConfig;
use crate::validation::{GoalForm, InputError, MealForm, WorkoutForm};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::fmt::Write as _;
use std::io::{BufRead, Write};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Front-end errors. The message is shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("{0}")]
    Goal(#[from] GoalError),

    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    NotFound(String),
}

/// Result of handling one session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print; may be empty
    Output(String),
    /// End the session
    Quit,
}

#[derive(Parser, Debug)]
#[command(name = "fitness-daily", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands accepted inside a session.
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Log and manage workouts
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Log and manage meals
    Meal {
        #[command(subcommand)]
        action: MealCommand,
    },

    /// Manage fitness goals
    Goal {
        #[command(subcommand)]
        action: GoalCommand,
    },

    /// 30-day statistics
    Stats,

    /// Achievement list with progress
    Achievements,

    /// Weekly and goal progress
    Progress,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum WorkoutCommand {
    /// Log a workout
    Add {
        name: String,
        /// Duration in minutes
        duration: String,
        /// Calories burned
        calories: String,
        /// Also save it as a favorite template
        #[arg(long)]
        favorite: bool,
    },
    /// List logged workouts
    List,
    /// Delete a logged workout by list position
    Delete { position: usize },
    /// Star or unstar a logged workout by list position
    Favorite { position: usize },
    /// List favorite templates
    Favorites,
    /// Log a favorite template again
    Repeat { position: usize },
}

#[derive(Subcommand, Debug)]
pub enum MealCommand {
    /// Log a meal
    Add {
        name: String,
        /// Energy in kcal
        calories: String,
        #[arg(long, default_value = "")]
        protein: String,
        #[arg(long, default_value = "")]
        carbs: String,
        #[arg(long, default_value = "")]
        fat: String,
        /// breakfast, lunch, dinner or snack
        #[arg(long = "type", default_value = "")]
        meal_type: String,
    },
    /// List logged meals
    List,
    /// Delete a logged meal by list position
    Delete { position: usize },
}

/// Shared goal form arguments.
#[derive(clap::Args, Debug)]
pub struct GoalArgs {
    title: String,
    target: String,
    #[arg(long, default_value = "")]
    current: String,
    #[arg(long, default_value = "")]
    unit: String,
    #[arg(long, default_value = "")]
    description: String,
}

impl GoalArgs {
    fn form(&self) -> GoalForm {
        GoalForm::new(&self.title, &self.target)
            .current(&self.current)
            .unit(&self.unit)
            .description(&self.description)
    }
}

#[derive(Subcommand, Debug)]
pub enum GoalCommand {
    /// List goals
    List,
    /// Add a goal
    Add {
        #[command(flatten)]
        args: GoalArgs,
        /// weight_loss, muscle_gain, endurance or flexibility
        #[arg(long = "type", default_value = "weight_loss")]
        goal_type: String,
    },
    /// Edit a goal by list position
    Edit {
        position: usize,
        #[command(flatten)]
        args: GoalArgs,
    },
    /// Delete a goal by list position
    Delete { position: usize },
    /// Mark a goal complete, or reopen it
    Toggle { position: usize },
}

/// Split a line into words, keeping double-quoted text together.
pub fn tokenize(line: &str) -> Result<Vec<String>, AppError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if in_quotes {
        return Err(AppError::Usage("Unterminated quote".to_string()));
    }
    if pending {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Convert a 1-based list position to an index.
fn index_of(position: usize, len: usize, what: &str) -> Result<usize, AppError> {
    match position.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(AppError::NotFound(format!("No {} at position {}", what, position))),
    }
}

fn with_unlock(mut text: String, unlocked: Option<Achievement>) -> String {
    if let Some(achievement) = unlocked {
        text.push('\n');
        text.push_str(&achievement.unlock_message());
    }
    text
}

/// Application front end over a repository.
#[derive(Debug)]
pub struct FitnessApp {
    repo: DataRepository,
    config: AppConfig,
}

impl FitnessApp {
    pub fn new(repo: DataRepository, config: AppConfig) -> Self {
        Self { repo, config }
    }

    pub fn repository(&self) -> &DataRepository {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut DataRepository {
        &mut self.repo
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Messages shown when a session starts.
    ///
    /// Seeds sample data and default goals as configured and shows the
    /// startup quote when one is due.
    pub fn startup<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<String> {
        let mut lines = Vec::new();

        if Tutorial::should_show(self.repo.preferences()) {
            lines.push(
                "Welcome to FitnessDaily! Run `fitness-daily tutorial` for a quick tour."
                    .to_string(),
            );
        }

        if self.config.session.seed_sample_data {
            for achievement in self.repo.seed_sample_data() {
                lines.push(achievement.unlock_message());
            }
        }

        if self.repo.goals().is_empty() {
            self.repo.seed_default_goals();
        }

        if let Some(quote) = self.startup_quote(rng, false) {
            lines.push(quote);
        }

        lines
    }

    /// Motivational quote, if one is due (or `force` is set).
    ///
    /// Showing a quote records the time for the next check.
    pub fn startup_quote<R: Rng + ?Sized>(&mut self, rng: &mut R, force: bool) -> Option<String> {
        let now = self.repo.now();
        let settings = &self.config.quotes;

        let due = force
            || (settings.enabled
                && quotes::startup_quote_due(
                    self.repo.preferences().last_startup_quote(),
                    now,
                    settings.interval_hours,
                ));
        if !due {
            tracing::debug!("Startup quote not due");
            return None;
        }

        let quote = quotes::random_quote(rng);
        self.repo.preferences_mut().set_last_startup_quote(now);
        Some(format!("\"{}\"", quote.text))
    }

    /// Read commands from `input` until it ends or the user quits.
    pub fn run_session<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.handle(&line) {
                Ok(Reply::Quit) => break,
                Ok(Reply::Output(text)) => {
                    if !text.is_empty() {
                        writeln!(output, "{}", text)?;
                    }
                }
                Err(e) => writeln!(output, "{}", e.to_string().trim_end())?,
            }
        }
        output.flush()
    }

    /// Handle one session line.
    pub fn handle(&mut self, line: &str) -> Result<Reply, AppError> {
        let tokens = tokenize(line)?;
        let parsed =
            SessionLine::try_parse_from(tokens).map_err(|e| AppError::Usage(e.to_string()))?;

        tracing::debug!("Session command: {:?}", parsed.command);

        let text = match parsed.command {
            SessionCommand::Workout { action } => self.handle_workout(action)?,
            SessionCommand::Meal { action } => self.handle_meal(action)?,
            SessionCommand::Goal { action } => self.handle_goal(action)?,
            SessionCommand::Stats => self.render_stats(),
            SessionCommand::Achievements => self.render_achievements(),
            SessionCommand::Progress => self.render_progress(),
            SessionCommand::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(text))
    }

    fn handle_workout(&mut self, action: WorkoutCommand) -> Result<String, AppError> {
        match action {
            WorkoutCommand::Add {
                name,
                duration,
                calories,
                favorite,
            } => {
                let workout = WorkoutForm::new(&name, &duration, &calories)
                    .validate(self.repo.now())?
                    .favorite(favorite);
                let text = format!("Logged {}", workout.summary());
                let unlocked = self.repo.add_workout(workout.clone());
                if favorite {
                    self.repo.add_favorite_template(&workout);
                }
                Ok(with_unlock(text, unlocked))
            }
            WorkoutCommand::List => Ok(self.render_workouts()),
            WorkoutCommand::Delete { position } => {
                let index = index_of(position, self.repo.workouts().len(), "workout")?;
                let id = self.repo.workouts()[index].id;
                let removed = self
                    .repo
                    .delete_workout(id)
                    .ok_or_else(|| AppError::NotFound(format!("No workout at position {}", position)))?;
                Ok(format!("Deleted {}", removed.summary()))
            }
            WorkoutCommand::Favorite { position } => {
                let index = index_of(position, self.repo.workouts().len(), "workout")?;
                let workout = self.repo.workouts()[index].clone();
                match self.repo.toggle_favorite(workout.id) {
                    Some(true) => Ok(format!("Added {} to favorites", workout.name)),
                    Some(false) => Ok(format!("Removed {} from favorites", workout.name)),
                    None => Err(AppError::NotFound(format!(
                        "No workout at position {}",
                        position
                    ))),
                }
            }
            WorkoutCommand::Favorites => Ok(self.render_favorites()),
            WorkoutCommand::Repeat { position } => {
                let index = index_of(position, self.repo.favorite_templates().len(), "favorite")?;
                let (workout, unlocked) = self
                    .repo
                    .log_from_template(index)
                    .ok_or_else(|| AppError::NotFound(format!("No favorite at position {}", position)))?;
                Ok(with_unlock(format!("Logged {}", workout.summary()), unlocked))
            }
        }
    }

    fn handle_meal(&mut self, action: MealCommand) -> Result<String, AppError> {
        match action {
            MealCommand::Add {
                name,
                calories,
                protein,
                carbs,
                fat,
                meal_type,
            } => {
                let meal = MealForm::new(&name, &calories)
                    .macros(&protein, &carbs, &fat)
                    .meal_type(&meal_type)
                    .validate(self.repo.now())?;
                let text = format!("Logged {} ({} kcal, {})", meal.name, meal.calories, meal.meal_type);
                Ok(with_unlock(text, self.repo.add_meal(meal)))
            }
            MealCommand::List => Ok(self.render_meals()),
            MealCommand::Delete { position } => {
                let index = index_of(position, self.repo.meals().len(), "meal")?;
                let id = self.repo.meals()[index].id;
                let removed = self
                    .repo
                    .delete_meal(id)
                    .ok_or_else(|| AppError::NotFound(format!("No meal at position {}", position)))?;
                Ok(format!("Deleted {}", removed.name))
            }
        }
    }

    fn handle_goal(&mut self, action: GoalCommand) -> Result<String, AppError> {
        match action {
            GoalCommand::List => Ok(self.render_goals()),
            GoalCommand::Add { args, goal_type } => {
                let goal_type = goal_type.parse::<GoalType>().map_err(AppError::Usage)?;
                let goal = args.form().validate(goal_type)?;
                let text = format!("Added goal {}", goal.title);
                self.repo.add_goal(goal);
                Ok(text)
            }
            GoalCommand::Edit { position, args } => {
                let index = index_of(position, self.repo.goals().len(), "goal")?;
                let existing_type = self.repo.goals().goals()[index].goal_type;
                let edited = args.form().validate(existing_type)?;
                let goal = self.repo.update_goal(index, edited)?;
                Ok(format!("Updated goal {}", goal.title))
            }
            GoalCommand::Delete { position } => {
                let index = index_of(position, self.repo.goals().len(), "goal")?;
                let removed = self.repo.delete_goal(index)?;
                Ok(format!("Deleted goal {}", removed.title))
            }
            GoalCommand::Toggle { position } => {
                let index = index_of(position, self.repo.goals().len(), "goal")?;
                let (toggle, unlocked) = self.repo.toggle_goal(index)?;
                let title = &self.repo.goals().goals()[index].title;
                let text = match toggle {
                    GoalToggle::Completed => format!("Completed goal {}", title),
                    GoalToggle::Reopened => format!("Reopened goal {}", title),
                };
                Ok(with_unlock(text, unlocked))
            }
        }
    }

    // ========== Rendering ==========

    pub fn render_workouts(&self) -> String {
        let workouts = self.repo.workouts();
        if workouts.is_empty() {
            return "No workouts logged yet".to_string();
        }

        let mut out = String::new();
        for (i, workout) in workouts.iter().enumerate() {
            let star = if workout.is_favorite { " *" } else { "" };
            let _ = writeln!(
                out,
                "{}. {} - {}{}",
                i + 1,
                workout.summary(),
                workout.date.format(DATE_FORMAT),
                star
            );
        }
        out.trim_end().to_string()
    }

    pub fn render_favorites(&self) -> String {
        let templates = self.repo.favorite_templates();
        if templates.is_empty() {
            return "No favorite workouts yet".to_string();
        }

        templates
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t.summary()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_meals(&self) -> String {
        let meals = self.repo.meals();
        if meals.is_empty() {
            return "No meals logged yet".to_string();
        }

        let mut out = String::new();
        for (i, meal) in meals.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} [{}] {} kcal, {} - {}",
                i + 1,
                meal.name,
                meal.meal_type,
                meal.calories,
                meal.macros_summary(),
                meal.date.format(DATE_FORMAT)
            );
        }
        out.trim_end().to_string()
    }

    pub fn render_goals(&self) -> String {
        let board = self.repo.goals();
        if board.is_empty() {
            return "No goals yet".to_string();
        }

        let mut out = String::new();
        for (i, goal) in board.goals().iter().enumerate() {
            let mark = if goal.is_completed { "x" } else { " " };
            let _ = writeln!(out, "{}. [{}] {} ({})", i + 1, mark, goal.title, goal.goal_type);
            let _ = writeln!(out, "   {}", goal.progress_line());
        }
        let _ = write!(
            out,
            "Overall: {}% ({} goals completed)",
            board.overall_progress(),
            board.completed_count()
        );
        out
    }

    pub fn render_stats(&self) -> String {
        let summary = self.repo.summary();
        let mut out = String::new();

        let _ = writeln!(out, "Last {} days", summary.window_days);
        let _ = writeln!(out, "Workouts: {}", summary.total_workouts);
        let _ = writeln!(out, "Calories burned: {}", summary.total_calories_burned);
        let _ = writeln!(out, "Avg daily calories: {}", summary.average_daily_calories);
        let _ = writeln!(
            out,
            "Protein: {:.1}g  Carbs: {:.1}g  Fat: {:.1}g",
            summary.total_protein, summary.total_carbs, summary.total_fat
        );
        let _ = writeln!(out, "Streak: {} days", self.repo.achievement_progress().current_streak);
        let _ = write!(out, "{}", summary.data_status().hint());
        out
    }

    pub fn render_achievements(&self) -> String {
        let tracker = self.repo.tracker();
        let progress = tracker.progress();
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Achievements: {}/{} earned ({:.0}%)",
            tracker.earned().len(),
            tracker.achievements().len(),
            tracker.completion_percentage()
        );
        for achievement in tracker.achievements() {
            let value = progress.value_for(achievement.achievement_type);
            let percent = achievement.percentage(value);
            let status = match achievement.earned_date {
                Some(date) if achievement.earned => format!("earned {}", date.format(DATE_FORMAT)),
                _ if achievement.earned => "earned".to_string(),
                _ => format!("{}/{}", value.min(achievement.milestone), achievement.milestone),
            };
            let _ = writeln!(
                out,
                "[{}] {} - {} {} {}",
                if achievement.earned { "x" } else { " " },
                achievement.title,
                achievement.description,
                progress_bar(percent, 10),
                status
            );
        }
        out.trim_end().to_string()
    }

    pub fn render_progress(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Weekly workouts");
        for week in self.repo.weekly_progress() {
            let _ = writeln!(
                out,
                "{} {} {}% ({:?})",
                week.label,
                progress_bar(week.percent, 10),
                week.percent,
                ProgressBand::from_percent(week.percent)
            );
        }

        let _ = writeln!(out, "Goals");
        for goal in self.repo.goals().goals() {
            let percent = goal.progress_percent();
            let _ = writeln!(out, "{} {} {}%", goal.title, progress_bar(percent, 10), percent);
        }
        let _ = write!(out, "Overall goal progress: {}%", self.repo.goals().overall_progress());
        out
    }

    /// Show the tutorial pages, or skip them, and mark the tutorial done.
    pub fn run_tutorial(&mut self, skip: bool) -> String {
        let mut tutorial = Tutorial::new();
        let prefs = self.repo.preferences_mut();

        if skip {
            tutorial.skip(prefs);
            return "Tutorial skipped".to_string();
        }

        let mut out = String::new();
        let total = OnboardingStep::all().len();
        loop {
            let step = tutorial.current_step();
            let _ = writeln!(out, "({}/{}) {}", step.index() + 1, total, step.title());
            let _ = writeln!(out, "{}", step.description());
            if tutorial.advance(prefs) {
                break;
            }
        }
        out.trim_end().to_string()
    }

    /// Settings "delete all data": wipe fitness data and app settings.
    pub fn reset_all_data(&mut self) {
        self.repo.clear_all_data();
        self.repo.preferences_mut().clear_app_data();
    }
}
