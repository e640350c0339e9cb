/*!
 * End-to-end conversion workflow tests over fixture geometry:
 * parse -> SRT generation -> validation -> persisted artifacts
 */

use std::fs;
use std::path::Path;

use adscribe::app_config::Config;
use adscribe::app_controller::Controller;
use adscribe::pdf::{ParseOptions, PdfScriptParser};
use adscribe::srt_generator::SrtGenerator;
use adscribe::validation::ConversionValidator;

use crate::common::{self, geometry, underline, word, FixtureGeometrySource};

#[test]
fn test_workflow_parseGenerateValidate_shouldProduceConsistentArtifacts() {
    let parser = PdfScriptParser::with_source(Box::new(FixtureGeometrySource::new(
        common::sample_script_page(),
    )));

    let parsed = parser
        .parse(Path::new("episode01.pdf"), &ParseOptions::default())
        .unwrap();
    assert_eq!(parsed.entries.len(), 2);

    // SRT output carries both entries with chained timestamps
    let srt = SrtGenerator::new().generate(&parsed.entries, 40, true, true);
    assert!(srt.contains("1\n00:00:36,000 --> 00:01:12,000"));
    assert!(srt.contains("그가 천천히 돌아선다"));
    assert!(srt.contains("문이 열리고 수진이 들어온다"));

    // Validation sees the dropped stage-direction region, not lost narration
    let ground_truth = parser.underlined_text(Path::new("episode01.pdf")).unwrap();
    let result =
        ConversionValidator::new().validate(&ground_truth, &parsed.entries, parsed.anchor_count);
    assert!(!result.timecode_match);
    assert!(result.syllable_match);
}

#[test]
fn test_controller_run_shouldWriteSrtAndValidationReport() {
    let temp_dir = common::create_temp_dir().unwrap();
    let input = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "episode01.pdf",
        "fixture stand-in",
    )
    .unwrap();
    let output_dir = temp_dir.path().join("out");

    let controller = Controller::with_geometry_source(
        Config::default(),
        Box::new(FixtureGeometrySource::new(common::sample_script_page())),
    )
    .unwrap();

    controller
        .run(input.clone(), output_dir.clone(), false)
        .unwrap();

    let srt = fs::read_to_string(output_dir.join("episode01.srt")).unwrap();
    assert!(srt.contains("그가 천천히 돌아선다"));

    let report = fs::read_to_string(output_dir.join("episode01_validation.txt")).unwrap();
    assert!(report.contains("[Timecode check]"));
    assert!(report.contains("Overall: FAILED")); // dropped region is flagged
}

#[test]
fn test_controller_run_withCleanScript_shouldPassValidation() {
    let temp_dir = common::create_temp_dir().unwrap();
    let input = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "episode02.pdf",
        "fixture stand-in",
    )
    .unwrap();
    let output_dir = temp_dir.path().join("out");

    // two regions, both with underlined narration: nothing to flag
    let geom = geometry(
        vec![
            word(0, 50.0, 100.0, 80.0, "0036"),
            word(0, 90.0, 100.0, 140.0, "그가"),
            word(0, 150.0, 100.0, 200.0, "돌아선다"),
            word(0, 50.0, 200.0, 80.0, "0112"),
            word(0, 90.0, 200.0, 140.0, "문이"),
            word(0, 150.0, 200.0, 200.0, "열린다"),
        ],
        vec![
            underline(0, 114.0, 90.0, 200.0),
            underline(0, 214.0, 90.0, 200.0),
        ],
        1,
    );

    let controller =
        Controller::with_geometry_source(Config::default(), Box::new(FixtureGeometrySource::new(geom)))
            .unwrap();

    controller.run(input, output_dir.clone(), false).unwrap();

    let report = fs::read_to_string(output_dir.join("episode02_validation.txt")).unwrap();
    assert!(report.contains("Overall: PASSED"));
}

#[test]
fn test_controller_run_withExistingOutput_shouldSkipWithoutForce() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "episode01.pdf", "fixture stand-in").unwrap();
    let existing = common::create_test_file(&dir, "episode01.srt", "old content").unwrap();

    let controller = Controller::with_geometry_source(
        Config::default(),
        Box::new(FixtureGeometrySource::new(common::sample_script_page())),
    )
    .unwrap();

    controller.run(input.clone(), dir.clone(), false).unwrap();
    assert_eq!(fs::read_to_string(&existing).unwrap(), "old content");

    controller.run(input, dir, true).unwrap();
    assert_ne!(fs::read_to_string(&existing).unwrap(), "old content");
}

#[test]
fn test_controller_run_withNarrationlessPdf_shouldWriteNothing() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "empty.pdf", "fixture stand-in").unwrap();
    let output_dir = temp_dir.path().join("out");

    // words but no anchors and no underlines
    let geom = geometry(vec![word(0, 50.0, 100.0, 90.0, "제목")], vec![], 1);

    let controller =
        Controller::with_geometry_source(Config::default(), Box::new(FixtureGeometrySource::new(geom)))
            .unwrap();

    // zero AD content is a successful no-op, not an error
    controller.run(input, output_dir.clone(), false).unwrap();

    assert!(!output_dir.join("empty.srt").exists());
}

#[test]
fn test_controller_run_withMissingInput_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();

    let controller = Controller::with_geometry_source(
        Config::default(),
        Box::new(FixtureGeometrySource::new(common::sample_script_page())),
    )
    .unwrap();

    let result = controller.run(
        temp_dir.path().join("absent.pdf"),
        temp_dir.path().to_path_buf(),
        false,
    );

    assert!(result.is_err());
}

#[test]
fn test_controller_runFolder_shouldConvertEveryPdf() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "episode01.pdf", "fixture stand-in").unwrap();
    common::create_test_file(&dir, "episode02.pdf", "fixture stand-in").unwrap();
    common::create_test_file(&dir, "readme.txt", "not a script").unwrap();

    let controller = Controller::with_geometry_source(
        Config::default(),
        Box::new(FixtureGeometrySource::new(common::sample_script_page())),
    )
    .unwrap();

    controller.run_folder(dir.clone(), false).unwrap();

    assert!(dir.join("episode01.srt").exists());
    assert!(dir.join("episode02.srt").exists());
    assert!(!dir.join("readme.srt").exists());
}
