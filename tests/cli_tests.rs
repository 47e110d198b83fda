//! End-to-end tests of the genotype-crosscheck binary
//!
//! Each test writes a small raw-data download, key file, and API payload into a
//! temporary directory and runs the binary against them.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RAW_DATA: &str = "# This data file generated by 23andMe\n\
# rsid\tchromosome\tposition\tgenotype\n\
rs1\t1\t100\tAA\n\
rs2\t1\t200\tGA\n\
rs3\t1\t300\tC\n\
rs4\t1\t400\tGA\n\
rs5\t2\t500\tTT\n";

const KEY: &str = "# snps.data\n\
index\tsnp\tchromosome\tchromosome_position\n\
0\trs1\t1\t100\n\
1\trs2\t1\t200\n\
2\trs3\t1\t300\n\
3\trs4\t1\t400\n\
4\trs5\t2\t500\n\
5\trs6\t2\t600\n";

/// rs1 match, rs2 AG|GA, rs3 CC|C false alarm, rs4 AG|GA, rs5 match, rs6 --| false alarm
const GENOME: &str = "AAAGCCAGTT--";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        fixture.write("raw.txt", RAW_DATA);
        fixture.write("snps.data", KEY);
        fixture.write(
            "genome.json",
            &format!(r#"{{"id": "a42e94634e3f7683", "genome": "{GENOME}"}}"#),
        );
        fixture.write("genome.raw", GENOME);
        fixture
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn command(&self, raw: &str, api: &str, key: &str) -> Command {
        let mut cmd = Command::cargo_bin("genotype-crosscheck").unwrap();
        cmd.arg("-r")
            .arg(self.path(raw))
            .arg("-a")
            .arg(self.path(api))
            .arg("-k")
            .arg(self.path(key));
        cmd
    }
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_text_report_from_json() {
    let fixture = Fixture::new();
    let stdout = stdout_of(&mut fixture.command("raw.txt", "genome.json", "snps.data"));

    assert_eq!(
        stdout,
        "APICall: AG\tRawDataCall: GA\tTotal: 2\n\
SNPS: rs2, rs4\n\
\n\
Same: 4, Mismatches: 2, Same: 66.666667%\n"
    );
}

#[test]
fn test_raw_stream_matches_json() {
    let fixture = Fixture::new();
    let from_json = stdout_of(&mut fixture.command("raw.txt", "genome.json", "snps.data"));
    let from_raw = stdout_of(
        fixture
            .command("raw.txt", "genome.raw", "snps.data")
            .args(["--api-format", "raw"]),
    );
    assert_eq!(from_json, from_raw);
}

#[test]
fn test_no_false_alarms_counts_every_difference() {
    let fixture = Fixture::new();
    let stdout = stdout_of(
        fixture
            .command("raw.txt", "genome.json", "snps.data")
            .arg("--no-false-alarms"),
    );

    assert!(stdout.starts_with("APICall: AG\tRawDataCall: GA\tTotal: 2\n"));
    assert!(stdout.contains("APICall: --\tRawDataCall: \tTotal: 1\n"));
    assert!(stdout.contains("APICall: CC\tRawDataCall: C\tTotal: 1\n"));
    assert!(stdout.ends_with("Same: 2, Mismatches: 4, Same: 33.333333%\n"));
}

#[test]
fn test_extra_false_alarm() {
    let fixture = Fixture::new();
    fixture
        .command("raw.txt", "genome.json", "snps.data")
        .args(["--false-alarm", "AG|GA"])
        .assert()
        .success()
        .stdout("Same: 6, Mismatches: 0, Same: 100.000000%\n");
}

#[test]
fn test_json_output() {
    let fixture = Fixture::new();
    let stdout = stdout_of(
        fixture
            .command("raw.txt", "genome.json", "snps.data")
            .args(["--format", "json"]),
    );
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["api_id"], "a42e94634e3f7683");
    assert_eq!(value["matches"], 4);
    assert_eq!(value["mismatches"], 2);
    assert_eq!(
        value["mismatch_categories"][0]["snps"],
        serde_json::json!(["rs2", "rs4"])
    );
}

#[test]
fn test_tsv_output() {
    let fixture = Fixture::new();
    fixture
        .command("raw.txt", "genome.json", "snps.data")
        .args(["-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "api_call\traw_data_call\tcount\nAG\tGA\t2\n",
        ));
}

#[test]
fn test_snp_list_threshold() {
    let fixture = Fixture::new();
    fixture
        .command("raw.txt", "genome.json", "snps.data")
        .args(["--snp-list-threshold", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SNPS:").not());
}

#[test]
fn test_missing_flag_prints_usage() {
    let fixture = Fixture::new();
    Command::cargo_bin("genotype-crosscheck")
        .unwrap()
        .arg("-r")
        .arg(fixture.path("raw.txt"))
        .arg("-k")
        .arg(fixture.path("snps.data"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--api-data"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_input_file_fails() {
    let fixture = Fixture::new();
    fixture
        .command("absent.txt", "genome.json", "snps.data")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load raw data"));
}

#[test]
fn test_malformed_key_truncates_unless_strict() {
    let fixture = Fixture::new();
    fixture.write("bad_key.data", "0\trs1\n1\trs2\noops\trs3\n3\trs4\n");

    // Positions 2.. have no SNP, so their calls are compared against empty raw calls
    let stdout = stdout_of(&mut fixture.command("raw.txt", "genome.json", "bad_key.data"));
    assert!(stdout.contains("APICall: AG\tRawDataCall: GA\tTotal: 1\n"));
    assert!(stdout.contains("APICall: CC\tRawDataCall: \tTotal: 1\n"));

    fixture
        .command("raw.txt", "genome.json", "bad_key.data")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_odd_length_genome_drops_orphan() {
    let fixture = Fixture::new();
    fixture.write("odd.raw", "AAGAC");

    fixture
        .command("raw.txt", "odd.raw", "snps.data")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Same: 2, Mismatches: 0, Same: 100.000000%\n",
        ));
}

#[test]
fn test_gzipped_raw_data() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let fixture = Fixture::new();
    let path: &Path = &fixture.path("raw.txt.gz");
    let mut encoder = GzEncoder::new(fs::File::create(path).unwrap(), Compression::default());
    encoder.write_all(RAW_DATA.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let plain = stdout_of(&mut fixture.command("raw.txt", "genome.json", "snps.data"));
    let gzipped = stdout_of(&mut fixture.command("raw.txt.gz", "genome.json", "snps.data"));
    assert_eq!(plain, gzipped);
}
