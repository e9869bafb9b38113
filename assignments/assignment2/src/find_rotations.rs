// Fewest left rotations after which a string reads the same again: the
// string's smallest period.
use harness::{Case, Exercise, Report};

pub fn exercise() -> Exercise<String, usize> {
    Exercise::new("find_rotations")
        .candidate("iteration_0", |text: &String| iteration_0(text))
        .rejected(
            "iteration_3",
            "reads its previous-input variable before ever writing it",
        )
        .rejected(
            "iteration_4",
            "expects two strings; the grading table rotates a single one",
        )
}

fn iteration_0(text: &str) -> usize {
    let bytes = text.as_bytes();
    let length = bytes.len();
    for shift in 1..=length {
        let rotated = bytes[shift..].iter().chain(&bytes[..shift]);
        if rotated.eq(bytes.iter()) {
            return shift;
        }
    }
    length
}

fn case(text: &str, expected: usize) -> Case<String, usize> {
    Case::new(text.to_string(), expected)
}

pub fn cases() -> Vec<Case<String, usize>> {
    vec![
        case("aaaa", 1),
        case("ab", 2),
        case("abc", 3),
        case("kcwa", 4),
        case("ezxpedrz", 8),
        case("fgluxhtza", 9),
        case("mjoaexpfz", 9),
        case("linyxx", 6),
        case("pay", 3),
        case("rxmc", 4),
        case("qkkjahy", 7),
        case("slcswzxu", 8),
        case("zoiy", 4),
        case("rhjaux", 6),
        case("fkjfimi", 7),
        case("pbkflfnd", 8),
        case("rthqixv", 7),
        case("rej", 3),
        case("ifhbywu", 7),
        case("oost", 4),
        case("nxwjjwsas", 9),
        case("moockefg", 8),
        case("qqydevz", 7),
        case("wwivmp", 6),
        case("togvvenfp", 9),
        case("oolvpej", 7),
        case("tzegpv", 6),
        case("beahzutke", 9),
        case("xzwepkip", 8),
        case("sis", 3),
        case("qtbflguk", 8),
        case("jam", 3),
        case("gqbzuvv", 7),
        case("abvgipdym", 9),
        case("ttff", 4),
        case("jjeu", 4),
        case("rphw", 4),
        case("nbgwgz", 6),
        case("setbdn", 6),
        case("pscwbl", 6),
        case("flgboo", 6),
        case("bfxpdk", 6),
        case("mofei", 5),
        case("qyr", 3),
        case("uxk", 3),
        case("nbmy", 4),
        case("ege", 3),
        case("usoriq", 6),
        case("wjuwlt", 6),
        case("bnodui", 6),
        case("aevvqf", 6),
        case("iaktug", 6),
        case("vhufs", 5),
        case("hiat", 4),
        case("mzaym", 5),
        case("xnlqu", 5),
        case("zqdb", 4),
        case("flq", 3),
        case("oar", 3),
        case("fezfrb", 6),
        case("ipszr", 5),
        case("edyr", 4),
        case("nve", 3),
        case("yti", 3),
        case("bmfvr", 5),
        case("psafv", 5),
        case("zlhtd", 5),
        case("pacp", 4),
        case("qhgsk", 5),
        case("eyde", 4),
        case("eyv", 3),
        case("dxbgtvxq", 8),
        case("mfdx", 4),
        case("xask", 4),
        case("qddp", 4),
        case("oas", 3),
        case("fjilakl", 7),
        case("xwdsk", 5),
        case("owqgr", 5),
        case("lxv", 3),
        case("bxbb", 4),
        case("jbfisms", 7),
        case("zqupo", 5),
        case("qye", 3),
        case("hhxosqlg", 8),
        case("zhb", 3),
        case("iwkj", 4),
        case("maen", 4),
        case("lsliyhze", 8),
        case("doocsri", 7),
        case("cjc", 3),
        case("avi", 3),
        case("rfit", 4),
        case("tlgffvv", 7),
        case("vlk", 3),
        case("ljeftwkpr", 9),
        case("itzso", 5),
        case("zxfscko", 7),
        case("ewzfvb", 6),
        case("wdk", 3),
        case("gmlivxfm", 8),
        case("yvsnt", 5),
    ]
}

pub fn grade() -> Vec<Report> {
    harness::grade(&exercise(), &cases())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str) -> Report {
        grade().into_iter().find(|r| r.candidate == name).unwrap()
    }

    #[test]
    fn smallest_period_passes_every_case() {
        let report = report("iteration_0");
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn unreadable_attempts_are_rejected() {
        assert!(report("iteration_3").is_rejected());
        assert!(report("iteration_4").is_rejected());
    }

    #[test]
    fn periods_of_uniform_and_distinct_strings() {
        assert_eq!(iteration_0("aaaa"), 1);
        assert_eq!(iteration_0("ab"), 2);
        assert_eq!(iteration_0("abab"), 2);
        assert_eq!(iteration_0("abc"), 3);
    }
}
