//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use std::io::{self, Write};
use std::path::Path;

use crate::error::CliError;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误，并在有位置信息时显示源代码上下文
pub fn print_error_with_source(e: &CliError, input: &Path) {
    eprintln!("❌ {}", e);

    let Some(position) = e.position() else {
        return;
    };

    // The scan read the file as a stream; read it again for context.
    if let Ok(bytes) = std::fs::read(input) {
        let source = String::from_utf8_lossy(&bytes);
        let stderr = io::stderr();
        let _ = write_source_context(&mut stderr.lock(), &source, position.row, position.column);
    }
}

/// Write the lines around `error_line` with a caret under `error_col`
pub fn write_source_context<W: Write>(
    out: &mut W,
    source: &str,
    error_line: usize,
    error_col: usize,
) -> io::Result<()> {
    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    // a position just past the final newline has no line to show
    if error_line == 0 || error_line > total_lines {
        return Ok(());
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 行号的最大宽度用于对齐
    let width = end_line.to_string().len();

    writeln!(out, "{}|--", "-".repeat(width + 1))?;

    for line_idx in start_line..=end_line {
        writeln!(out, "{:>width$} | {}", line_idx, lines[line_idx - 1])?;

        if line_idx == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            writeln!(out, "{} | {}^", " ".repeat(width), marker)?;
        }
    }

    writeln!(out, "{}|--", "-".repeat(width + 1))
}
