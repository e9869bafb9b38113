// All runs of at least four word characters, in order of appearance.
use harness::{Case, Exercise, Report};
use regex::Regex;

pub fn exercise() -> Exercise<String, Vec<String>> {
    Exercise::new("find_char_long").candidate("iteration_3", |text: &String| iteration_3(text))
}

fn iteration_3(text: &str) -> Vec<String> {
    let words = Regex::new(r"\w{4,}").expect("pattern is a fixed literal");
    words
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

fn case(text: &str, expected: &[&str]) -> Case<String, Vec<String>> {
    Case::new(
        text.to_string(),
        expected.iter().map(|w| w.to_string()).collect(),
    )
}

pub fn cases() -> Vec<Case<String, Vec<String>>> {
    vec![
        case("Please move back to stream", &["Please", "move", "back", "stream"]),
        case("Jing Eco and Tech", &["Jing", "Tech"]),
        case("Jhingai wulu road Zone 3", &["Jhingai", "wulu", "road", "Zone"]),
        case(" BGBKxLZVVthfphWmiQlSzrk", &["BGBKxLZVVthfphWmiQlSzrk"]),
        case("oamnvNIOEluWpxgZjQMgjU", &["oamnvNIOEluWpxgZjQMgjU"]),
        case("sSAFCZAXyXogXCyFvSVPSokK", &["sSAFCZAXyXogXCyFvSVPSokK"]),
        case("iMfssAbLsbTESTfMgSAulTql", &["iMfssAbLsbTESTfMgSAulTql"]),
        case("kSPCWfEtMHhPiBiBSoDvv", &["kSPCWfEtMHhPiBiBSoDvv"]),
        case("DMqMVHYDsSAWWyKW ndNmUsLUYv", &["DMqMVHYDsSAWWyKW", "ndNmUsLUYv"]),
        case("GdWBslQdRIsZ pxW Ofysf", &["GdWBslQdRIsZ", "Ofysf"]),
        case("gLLpeKctHMWjkxjTRsCus", &["gLLpeKctHMWjkxjTRsCus"]),
        case("QXrgeewOnbwmcFUQvqgJAic", &["QXrgeewOnbwmcFUQvqgJAic"]),
        case("ryioUEshBzmGnpDIdOHHJ", &["ryioUEshBzmGnpDIdOHHJ"]),
        case("XnOPHydAzVMZTCQSDKssUcomo", &["XnOPHydAzVMZTCQSDKssUcomo"]),
        case("vpYBYlYpuIzKaHttbXWBrRiOttrz", &["vpYBYlYpuIzKaHttbXWBrRiOttrz"]),
        case("MtxMXTIUVXEFqYpHJnDdLxfYO", &["MtxMXTIUVXEFqYpHJnDdLxfYO"]),
        case("WvmLHJVYZGIDpYoSzFi oT", &["WvmLHJVYZGIDpYoSzFi"]),
        case("yQbwLOngQvQkBIPxPFTKm", &["yQbwLOngQvQkBIPxPFTKm"]),
        case("bcfDiOoWItswdQjAMCjvybetn", &["bcfDiOoWItswdQjAMCjvybetn"]),
        case("zEzrWDnnHQxPCCDAvqgJSzJSiZ", &["zEzrWDnnHQxPCCDAvqgJSzJSiZ"]),
        case("XUMYQigKNsKsyuSXNUxds mCsomL", &["XUMYQigKNsKsyuSXNUxds", "mCsomL"]),
        case("qudIjtprlcRGtnodTLeqWUqhYDIer", &["qudIjtprlcRGtnodTLeqWUqhYDIer"]),
        case("SyQjtNbykksnaRUwqPi fXa DUn", &["SyQjtNbykksnaRUwqPi"]),
        case("IOT gniYJobPkdtOUlCQ EbJMLeu", &["gniYJobPkdtOUlCQ", "EbJMLeu"]),
        case("bBjMoMZjEtPuRArhenzwig", &["bBjMoMZjEtPuRArhenzwig"]),
        case("RgiOIGheVJPfpNVhQHeYdvOdyxzUn", &["RgiOIGheVJPfpNVhQHeYdvOdyxzUn"]),
        case("fySkwzWkBMZYQIOHHoubRB", &["fySkwzWkBMZYQIOHHoubRB"]),
        case("VuFUUVThHNlfAqmmmRyvcWAhdx", &["VuFUUVThHNlfAqmmmRyvcWAhdx"]),
        case("TXzjZvYxSKHsXJOcyjtHGttpSAL", &["TXzjZvYxSKHsXJOcyjtHGttpSAL"]),
        case("vYagwqRuUbCSZNKkMYeFKVypKoZlq", &["vYagwqRuUbCSZNKkMYeFKVypKoZlq"]),
        case("voWObMMsZCvwsUvcVuCSVICHxwMmfk", &["voWObMMsZCvwsUvcVuCSVICHxwMmfk"]),
        case("uLKzIMePKMGZumtvTiPcWCrKGPhwh", &["uLKzIMePKMGZumtvTiPcWCrKGPhwh"]),
        case("BFRcHuB VnZvGHnaAOozjBgysw", &["BFRcHuB", "VnZvGHnaAOozjBgysw"]),
        case("oWBAShXgiCiLtfrWdWqiKH", &["oWBAShXgiCiLtfrWdWqiKH"]),
        case("IssAlvUbCFrGVcpqKuS fZ", &["IssAlvUbCFrGVcpqKuS"]),
        case("ibtxsjUuPbNwztOffYsuWt", &["ibtxsjUuPbNwztOffYsuWt"]),
        case("cBGFZguckCiSAUYoPRRm", &["cBGFZguckCiSAUYoPRRm"]),
        case("CMcrqzrgCBLotDzriXfmf", &["CMcrqzrgCBLotDzriXfmf"]),
        case("cSIYINRSskeZdCMh", &["cSIYINRSskeZdCMh"]),
        case("OlmGgybIpGPtPDrxZsV", &["OlmGgybIpGPtPDrxZsV"]),
        case("XqtuZsSyY AhoC mg", &["XqtuZsSyY", "AhoC"]),
        case("WYILarumXpvEAeNcHp", &["WYILarumXpvEAeNcHp"]),
        case("QbCEnZJtyqCBCxoiWrzY", &["QbCEnZJtyqCBCxoiWrzY"]),
        case("bBxvbvtObdnWDNkqOet", &["bBxvbvtObdnWDNkqOet"]),
        case("MUiSyjXXtDDuchY", &["MUiSyjXXtDDuchY"]),
        case("ekYCiJJHOkfxEkSoRnVYj", &["ekYCiJJHOkfxEkSoRnVYj"]),
        case("kMAz ESSibVUVDzFe", &["kMAz", "ESSibVUVDzFe"]),
        case("OxVgakvaDUCVyO", &["OxVgakvaDUCVyO"]),
        case("ljtXwUgoFdVgXnA", &["ljtXwUgoFdVgXnA"]),
        case("XMqBLEJAPTUbhrupv", &["XMqBLEJAPTUbhrupv"]),
        case("mrEr CZHOOH ", &["mrEr", "CZHOOH"]),
        case("RW aYlcLwlnQEHdNnlHt", &["aYlcLwlnQEHdNnlHt"]),
        case("MhhdfeFEWjtdt", &["MhhdfeFEWjtdt"]),
        case("RDpF QfPcZoQs", &["RDpF", "QfPcZoQs"]),
        case("ndJvdTjHhtCI", &["ndJvdTjHhtCI"]),
        case("aOsuOMxYiRZAdzWgWbx", &["aOsuOMxYiRZAdzWgWbx"]),
        case("faZRcFXwrFLtmbfqj", &["faZRcFXwrFLtmbfqj"]),
        case("RGmDjHYQVEtX", &["RGmDjHYQVEtX"]),
        case("ScyqmPCFPTnRpXJxyvJP", &["ScyqmPCFPTnRpXJxyvJP"]),
        case("fLgAvYkrzHDP", &["fLgAvYkrzHDP"]),
        case("yqwdggznmFmSRdftt", &["yqwdggznmFmSRdftt"]),
        case("GatHmsxjDGF SdVk", &["GatHmsxjDGF", "SdVk"]),
        case("sYWVPMJsrIMzGZR Yb", &["sYWVPMJsrIMzGZR"]),
        case(" ADjwOiAWjTln ", &["ADjwOiAWjTln"]),
        case("kLWtMQNjpnPMU", &["kLWtMQNjpnPMU"]),
        case("veWSCrvwgmWogCZGv", &["veWSCrvwgmWogCZGv"]),
        case("VuHyLuVXNCEIyCJmwnXC", &["VuHyLuVXNCEIyCJmwnXC"]),
        case("RYKFMhSoROfdWIGH", &["RYKFMhSoROfdWIGH"]),
        case("WsLHAYwhNOSHVGNDCv", &["WsLHAYwhNOSHVGNDCv"]),
        case("bmCMVkuUtWFfYmsY4gFC1YUjYX6", &["bmCMVkuUtWFfYmsY4gFC1YUjYX6"]),
        case("KoiP5tipiG5QlacNMb85k3T", &["KoiP5tipiG5QlacNMb85k3T"]),
        case("iMrfyQgsFrmLHC mP3mdqrLVz", &["iMrfyQgsFrmLHC", "mP3mdqrLVz"]),
        case("6NiziL5Z4m4514ctvbYX3VxtB1cN", &["6NiziL5Z4m4514ctvbYX3VxtB1cN"]),
        case("RwjqCngF2 bD5wb 8WqE5xXViiiL", &["RwjqCngF2", "bD5wb", "8WqE5xXViiiL"]),
        case("O4jDlqmnCyVFco8RNsaIeeXvJciot", &["O4jDlqmnCyVFco8RNsaIeeXvJciot"]),
        case("kyhvz7qJomhxxSS3vu ZNL", &["kyhvz7qJomhxxSS3vu"]),
        case("ggQudeSwAEr6n88igRT9py7ZuJ", &["ggQudeSwAEr6n88igRT9py7ZuJ"]),
        case("gKMiRILsylpickrxtCOHhnBhB ", &["gKMiRILsylpickrxtCOHhnBhB"]),
        case("2RQhS3holFQbf1WVTon8loqidM", &["2RQhS3holFQbf1WVTon8loqidM"]),
        case("9JSvLjie4UCPUYH 2ZL2ydwun", &["9JSvLjie4UCPUYH", "2ZL2ydwun"]),
        case("evBxZWXd6mWPU8dL97gzf", &["evBxZWXd6mWPU8dL97gzf"]),
        case("4tgLUTNhQeT2xuaeGk96rXP", &["4tgLUTNhQeT2xuaeGk96rXP"]),
        case("5Dj0NMcqk Dtu5enQ42RnDKdBcOX", &["5Dj0NMcqk", "Dtu5enQ42RnDKdBcOX"]),
        case(" Zsd4OxG8uostqSAYeQzs6jf", &["Zsd4OxG8uostqSAYeQzs6jf"]),
        case("ty1pSwdTDkRLeh0inWf q", &["ty1pSwdTDkRLeh0inWf"]),
        case("nEzuAjwEnAxa6q9HChSwj8 gJMmM", &["nEzuAjwEnAxa6q9HChSwj8", "gJMmM"]),
        case("Y4zHrho2ouwMyW830JSFp", &["Y4zHrho2ouwMyW830JSFp"]),
        case("YIi7EhQTOvmI0sL0tASvJeiNYRmfw", &["YIi7EhQTOvmI0sL0tASvJeiNYRmfw"]),
        case("rggZeq1Q0 cwEmit5FlgCI ", &["rggZeq1Q0", "cwEmit5FlgCI"]),
        case("KkxFPRfGyaj1xti6kigB5s", &["KkxFPRfGyaj1xti6kigB5s"]),
        case("NkIxwu2l7xaIXuZCGG unRhU1S", &["NkIxwu2l7xaIXuZCGG", "unRhU1S"]),
        case("mq7w8BQtAKp8jlMJTgo8DgkYeR5xJp", &["mq7w8BQtAKp8jlMJTgo8DgkYeR5xJp"]),
        case("Wejmw4AUuyKLxwvEa4u3Z8hF", &["Wejmw4AUuyKLxwvEa4u3Z8hF"]),
        case("y4MDozGfjTAN 32vA91SJpU", &["y4MDozGfjTAN", "32vA91SJpU"]),
        case("jErEXzWh T I3F3s1YgQ9ZRyy", &["jErEXzWh", "I3F3s1YgQ9ZRyy"]),
        case("NBb6QuYgC0sFvvt0faDsu", &["NBb6QuYgC0sFvvt0faDsu"]),
        case("EZl4C3z1r8AI8SUN37UK4J", &["EZl4C3z1r8AI8SUN37UK4J"]),
        case("kPG1vOyH9c07X9yv88JyY aIfB6", &["kPG1vOyH9c07X9yv88JyY", "aIfB6"]),
        case(" 3HzHRB4mh2NVCmfO9vgWfzp", &["3HzHRB4mh2NVCmfO9vgWfzp"]),
        case("JfN9mdKj3Kfv29rMNswWJYpfW3WTi", &["JfN9mdKj3Kfv29rMNswWJYpfW3WTi"]),
        case("ui7 OLqnKFX1RZHlShM7 6", &["OLqnKFX1RZHlShM7"]),
        case("z4k9ubpb1KgR5kyVxne8b", &["z4k9ubpb1KgR5kyVxne8b"]),
    ]
}

pub fn grade() -> Vec<Report> {
    harness::grade(&exercise(), &cases())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_extraction_passes_every_case() {
        let report = grade().into_iter().next().unwrap();
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn short_words_are_dropped() {
        assert_eq!(
            iteration_3("Please move back to stream"),
            vec!["Please", "move", "back", "stream"]
        );
        assert!(iteration_3("a bb ccc").is_empty());
    }
}
