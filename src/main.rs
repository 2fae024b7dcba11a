use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use gesture_analyzer::{analyze_video, logger, AnalysisResult, Settings};

/// 解析手势舞视频的动作序列，结果以单行 JSON 输出到 stdout
#[derive(Parser, Debug)]
#[command(name = "analyse-video", version, about)]
struct Cli {
    /// 本地视频文件路径（允许以 `-` 开头）
    #[arg(allow_hyphen_values = true)]
    video: Option<PathBuf>,

    /// 多余的参数直接忽略
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // 参数错误同样只输出一行 JSON
            emit(&AnalysisResult::failure(e.to_string().trim().to_string()));
            return ExitCode::from(1);
        }
        Err(e) => e.exit(),
    };

    // 日志初始化失败不影响结果输出
    let _guard = match logger::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    };

    let Some(video_path) = cli.video else {
        emit(&AnalysisResult::failure("请提供本地视频路径"));
        return ExitCode::from(1);
    };

    let result = match Settings::from_env() {
        Ok(settings) => analyze_video(&settings, &video_path).await,
        Err(e) => AnalysisResult::from(e),
    };

    if let AnalysisResult::Failure { error } = &result {
        error!("{}", error);
    }

    emit(&result);
    ExitCode::SUCCESS
}

/// 输出单行 JSON 并立即刷新
fn emit(result: &AnalysisResult) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", result.to_json_line()).and_then(|_| stdout.flush()) {
        error!("写出结果失败: {}", e);
    }
}
