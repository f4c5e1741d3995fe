use regex::Regex;
use std::sync::OnceLock;

use crate::alignment::{Alignment, Record};
use crate::error::TrimResult;

fn non_alnum_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^A-Za-z0-9]+").expect("valid identifier pattern"))
}

/// 清洗序列标识符：去掉 `_(reversed)` 标记和括号，去掉末尾空白，
/// 再把每段非字母数字字符替换为单个 `_`。
pub fn sanitize_id(id: &str) -> String {
    let stripped = id.replace("_(reversed)", "").replace(&['(', ')'][..], "");
    non_alnum_runs().replace_all(stripped.trim_end(), "_").into_owned()
}

/// Rename every record with [`sanitize_id`]. Returns the rebuilt alignment and
/// the `(original, sanitized)` pairs of ids that changed. Two ids collapsing
/// to the same name is reported as a duplicate.
pub fn sanitize_alignment_ids(aln: Alignment) -> TrimResult<(Alignment, Vec<(String, String)>)> {
    let mut renamed = Vec::new();
    let records: Vec<Record> = aln
        .into_records()
        .into_iter()
        .map(|mut rec| {
            let clean = sanitize_id(&rec.id);
            if clean != rec.id {
                renamed.push((std::mem::replace(&mut rec.id, clean.clone()), clean));
            }
            rec
        })
        .collect();
    Ok((Alignment::new(records)?, renamed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrimError;

    #[test]
    fn sanitize_examples() {
        assert_eq!(sanitize_id("HAV_IA_(reversed)"), "HAV_IA");
        assert_eq!(sanitize_id("sample (1)"), "sample_1");
        assert_eq!(sanitize_id("a|b||c.d"), "a_b_c_d");
        assert_eq!(sanitize_id("trail  "), "trail");
        assert_eq!(sanitize_id("clean01"), "clean01");
        assert_eq!(sanitize_id("-lead/trail-"), "_lead_trail_");
        assert_eq!(sanitize_id("Ünïcode id"), "_n_code_id");
    }

    #[test]
    fn sanitize_alignment_reports_renames() {
        let aln = Alignment::new(vec![Record::new("ref", "-A-"), Record::new("q|1", "CAG")]).unwrap();
        let (aln, renamed) = sanitize_alignment_ids(aln).unwrap();
        assert_eq!(renamed, vec![("q|1".to_string(), "q_1".to_string())]);
        assert_eq!(aln.ids().collect::<Vec<_>>(), vec!["ref", "q_1"]);
    }

    #[test]
    fn sanitize_collision_is_duplicate() {
        let aln = Alignment::new(vec![Record::new("q|1", "-A-"), Record::new("q.1", "CAG")]).unwrap();
        assert_eq!(sanitize_alignment_ids(aln).unwrap_err(), TrimError::DuplicateId { id: "q_1".into() });
    }
}
