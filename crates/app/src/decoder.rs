//! Result decoder — execution results back to natural-language sentences.
//!
//! Dispatches on the shape of the input text, in priority order: grouped
//! status report, arrow/colon result lines, error text, raw passthrough.
//! Clauses are joined with `；` and terminated with a single `。`.

use labvoice_domain::device::DeviceKind;
use labvoice_domain::error::DecodeError;

/// Marker of a status-report room header.
const ROOM_HEADER: &str = "实验室:";

/// Describe an execution result, status report, or raw message.
///
/// # Errors
///
/// Returns [`DecodeError::EmptyResult`] when the text has no non-blank
/// lines.
pub fn describe(result: &str) -> Result<String, DecodeError> {
    let lines: Vec<&str> = result.lines().filter(|line| !line.trim().is_empty()).collect();
    let Some(first) = lines.first() else {
        return Err(DecodeError::EmptyResult);
    };

    if first.contains(ROOM_HEADER) {
        return Ok(describe_status_report(&lines));
    }

    if lines.iter().any(|line| line.contains("->") || line.contains(':')) {
        return Ok(describe_result_lines(&lines));
    }

    if result.to_lowercase().contains("error") || result.contains("错误") {
        return Ok(format!("操作失败：{result}"));
    }

    Ok(format!("操作结果：{result}"))
}

/// Grouped status report: `实验室: <name>` headers followed by indented
/// `<device>: 通电|断电` lines.
fn describe_status_report(lines: &[&str]) -> String {
    let mut clauses: Vec<String> = Vec::new();
    let mut current_room = "";

    for line in lines {
        if let Some(rest) = line.strip_prefix(ROOM_HEADER) {
            current_room = rest.trim();
            continue;
        }
        let trimmed = line.trim();
        if ["动力:", "照明:", "空调:"].iter().any(|prefix| trimmed.starts_with(prefix)) {
            let mut parts = trimmed.splitn(2, ':');
            let device = parts.next().unwrap_or_default().trim();
            let status = parts.next().unwrap_or_default().trim();
            clauses.push(format!(
                "{current_room}实验室的{device}{}",
                if status == "通电" { "已通电" } else { "已断电" }
            ));
        }
    }

    format!("{}。", clauses.join("；"))
}

/// Per-line translation of toggle results (`05-08 lighting -> ON`) and
/// colon-shaped key/value lines.
fn describe_result_lines(lines: &[&str]) -> String {
    let mut clauses: Vec<String> = Vec::new();

    for line in lines {
        if let Some((target, action)) = line.split_once("->") {
            let mut words = target.trim().split_whitespace();
            let room = words.next().unwrap_or_default();
            let device = words.next().unwrap_or_default();
            let device = DeviceKind::from_key(device)
                .map_or_else(|| device.to_string(), |kind| kind.label().to_string());
            clauses.push(format!(
                "{room}实验室的{device}已{}",
                if action.trim() == "ON" { "打开" } else { "关闭" }
            ));
        } else if line.contains(':') {
            // First colon splits key from value; any further colons are
            // rejoined full-width.
            let parts: Vec<&str> = line.split(':').map(str::trim).collect();
            clauses.push(format!("{}{}", parts[0], parts[1..].join("：")));
        } else {
            clauses.push((*line).to_string());
        }
    }

    format!("{}。", clauses.join("；"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_single_toggle_line() {
        assert_eq!(
            describe("05-08 lighting -> ON").unwrap(),
            "05-08实验室的照明已打开。"
        );
    }

    #[test]
    fn should_describe_multiple_toggle_lines() {
        assert_eq!(
            describe("05-08 lighting -> ON\nA415 ac -> OFF").unwrap(),
            "05-08实验室的照明已打开；A415实验室的空调已关闭。"
        );
    }

    #[test]
    fn should_pass_unknown_device_key_through() {
        assert_eq!(
            describe("05-08 heater -> ON").unwrap(),
            "05-08实验室的heater已打开。"
        );
    }

    #[test]
    fn should_describe_status_report() {
        let report = "实验室: 05-08\n  动力: 通电\n  照明: 断电\n  空调: 通电\n";
        assert_eq!(
            describe(report).unwrap(),
            "05-08实验室的动力已通电；05-08实验室的照明已断电；05-08实验室的空调已通电。"
        );
    }

    #[test]
    fn should_describe_status_report_for_multiple_rooms() {
        let report = "实验室: 05-08\n  动力: 通电\n\n实验室: A415\n  动力: 断电\n";
        assert_eq!(
            describe(report).unwrap(),
            "05-08实验室的动力已通电；A415实验室的动力已断电。"
        );
    }

    #[test]
    fn should_split_colon_lines_at_first_colon_only() {
        assert_eq!(
            describe("05-08: power: ON").unwrap(),
            "05-08power：ON。"
        );
    }

    #[test]
    fn should_prefix_error_text_without_colon() {
        assert_eq!(
            describe("未知错误").unwrap(),
            "操作失败：未知错误"
        );
        assert_eq!(
            describe("internal error").unwrap(),
            "操作失败：internal error"
        );
    }

    #[test]
    fn should_fall_back_to_result_prefix() {
        assert_eq!(describe("完成").unwrap(), "操作结果：完成");
    }

    #[test]
    fn should_reject_blank_input() {
        assert_eq!(describe("").unwrap_err(), DecodeError::EmptyResult);
        assert_eq!(describe(" \n \n").unwrap_err(), DecodeError::EmptyResult);
    }
}
