use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use student_registry::models::{QuerySpec, SortField, SortOrder, StudentId, StudentInput};
use student_registry::utils::{logging, truncate_text};
use student_registry::workflow::{Dashboard, ListPage, ListView};
use student_registry::{App, AppError, Config};
use tracing::{error, warn};

#[derive(Debug, Parser)]
#[command(name = "student-registry", about = "学生注册管理客户端")]
struct Cli {
    /// TOML 配置文件（不指定时读取环境变量）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 学生列表（搜索 / 过滤 / 排序 / 分页）
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        course: Option<String>,
        #[arg(long, value_enum, default_value_t = SortField::Name)]
        sort: SortField,
        #[arg(long, value_enum, default_value_t = SortOrder::Asc)]
        order: SortOrder,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// 仪表盘统计
    Stats,
    /// 注册学生
    Register {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        course: String,
        /// 最高学历
        #[arg(long, default_value = "")]
        education: String,
        #[arg(long, default_value = "")]
        percentage: String,
        #[arg(long, default_value = "")]
        branch: String,
        #[arg(long, default_value = "")]
        mobile: String,
    },
    /// 从 TOML 文件或目录批量注册
    Import { path: PathBuf },
    /// 按 ID 删除学生
    Remove { id: i64 },
    /// 后端健康检查
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path)
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => Config::from_env(),
    };
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    let app = App::initialize(config)?;

    if let Err(e) = run(&app, cli.command).await {
        report(&e);
        return Err(e.into());
    }

    Ok(())
}

async fn run(app: &App, command: Command) -> Result<(), AppError> {
    match command {
        Command::List {
            search,
            course,
            sort,
            order,
            page,
        } => {
            let mut spec = QuerySpec::new().search(search).sort_by(sort, order);
            spec.course_filter = course;

            let mut view = app.list_view().with_spec(spec);
            let first = app.list(&view).await?;
            view.go_to(page, first.total_pages);
            if view.current_page() != page {
                warn!("页码 {} 超出范围，显示第 {} 页", page, view.current_page());
            }
            let list_page = app.list(&view).await?;
            print_list(&view, &list_page);
        }
        Command::Stats => {
            let dashboard = app.dashboard().await?;
            logging::log_stats(&dashboard.stats);
            print_dashboard(&dashboard);
        }
        Command::Register {
            name,
            email,
            course,
            education,
            percentage,
            branch,
            mobile,
        } => {
            let input = StudentInput {
                name,
                email,
                course,
                highest_education: education,
                percentage,
                branch,
                mobile_number: mobile,
            };
            app.register(&input).await?;
            println!("✅ 学生注册成功，当前共 {} 名学生", app.snapshot().await.len());
        }
        Command::Import { path } => {
            let summary = app.import(&path).await?;
            println!("✅ 成功: {}/{}", summary.succeeded, summary.total());
            for (index, name, e) in &summary.failed {
                println!("❌ 第 {} 条 ({}): {}", index, name, e);
            }
        }
        Command::Remove { id } => {
            app.remove(StudentId(id)).await?;
            println!("✅ 学生 {} 已删除", id);
        }
        Command::Health => {
            let status = app.health().await?;
            println!("{}", status);
        }
    }
    Ok(())
}

fn report(e: &AppError) {
    error!("❌ {}", e.user_message());
    if let Some(errors) = e.validation_errors() {
        for (field, message) in errors.fields() {
            error!("   - {}: {}", field, message);
        }
    }
}

/// 列头，当前排序列带方向箭头
fn column(title: &str, field: SortField, spec: &QuerySpec) -> String {
    if spec.sort_field == field {
        format!("{}{}", title, spec.sort_order.indicator())
    } else {
        title.to_string()
    }
}

fn print_list(view: &ListView, list_page: &ListPage) {
    let spec = view.spec();
    println!("{}", view.summary(list_page));
    println!("{}", "─".repeat(96));
    println!(
        "{:<6} {:<20} {:<28} {:<26} {:>8}  {}",
        "ID",
        column("姓名", SortField::Name, spec),
        column("邮箱", SortField::Email, spec),
        column("课程", SortField::Course, spec),
        column("成绩", SortField::Percentage, spec),
        "档次"
    );
    println!("{}", "─".repeat(96));
    for student in &list_page.rows {
        println!(
            "{:<6} {:<20} {:<28} {:<26} {:>7}%  {}",
            student.id,
            truncate_text(&student.name, 18),
            truncate_text(&student.email, 26),
            truncate_text(&student.course, 24),
            student.percentage,
            student.percentage_band().label()
        );
    }
    if list_page.rows.is_empty() {
        if spec.has_filters() {
            println!("（没有匹配的学生，可去掉 --search / --course 再试）");
        } else {
            println!("（没有找到学生）");
        }
    }
    println!("{}", "─".repeat(96));
    println!(
        "第 {}/{} 页，可选课程: {}",
        list_page.current_page,
        list_page.total_pages,
        list_page.course_options.join(", ")
    );
}

fn print_dashboard(dashboard: &Dashboard) {
    println!("最近注册的学生:");
    for student in &dashboard.recent_students {
        println!("  - {} ({}) {}%", student.name, student.course, student.percentage);
    }
    if dashboard.recent_students.is_empty() {
        println!("  （暂无学生）");
    }

    println!("热门课程:");
    for entry in &dashboard.popular_courses {
        println!(
            "  {}. {} - {} 名学生 ({}%)",
            entry.rank, entry.course.course, entry.course.count, entry.share
        );
    }
    if dashboard.popular_courses.is_empty() {
        println!("  （暂无课程数据）");
    }
}
