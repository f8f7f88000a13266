/// 文本规范化: 小写, 标点替换为空格, 合并空白并去除首尾空白
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for ch in lowered.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            // 空白和标点都视为分隔符
            pending_space = true;
        }
    }

    out
}
