use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::pdf::parser::{ParseOptions, PdfScriptParser};
use crate::pdf::timecode::format_duration;
use crate::pdf::GeometrySource;
use crate::srt_generator::SrtGenerator;
use crate::validation::ConversionValidator;

// @module: Application controller for script conversion

/// Main application controller for PDF script conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Script parser
    parser: PdfScriptParser,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            parser: PdfScriptParser::new(),
        })
    }

    /// Create a controller over a custom geometry source - used by tests
    pub fn with_geometry_source(config: Config, source: Box<dyn GeometrySource>) -> Result<Self> {
        Ok(Self {
            config,
            parser: PdfScriptParser::with_source(source),
        })
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            remove_slashes: self.config.parsing.remove_slashes,
            remove_periods: self.config.parsing.remove_periods,
            include_brackets: self.config.parsing.include_brackets,
        }
    }

    /// Convert a single script PDF to SRT, validate the result and persist
    /// the validation report next to the output.
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        FileManager::ensure_dir(&output_dir)?;

        let srt_path = FileManager::generate_output_path(&input_file, &output_dir, "srt");
        if srt_path.exists() && !force_overwrite {
            warn!("Skipping file, SRT already exists (use -f to force overwrite): {:?}", srt_path);
            return Ok(());
        }

        info!("Converting {:?}", input_file);

        // Parse the script; an unreadable PDF fails here with no partial output
        let parsed = self.parser.parse(&input_file, &self.parse_options())?;

        if parsed.entries.is_empty() {
            warn!(
                "No narration found in {:?} - check that the script text is underlined",
                input_file
            );
            return Ok(());
        }

        // Render and persist the SRT
        let generator = SrtGenerator::with_default_duration(self.config.srt.default_duration_ms);
        let content = generator.generate(
            &parsed.entries,
            self.config.srt.max_chars_per_line,
            self.config.srt.break_on_period,
            // Inlined instructions stay; otherwise brackets are display noise
            !self.config.parsing.include_brackets,
        );
        generator.save(&content, &srt_path)?;
        info!("Wrote {} entries to {:?}", parsed.entries.len(), srt_path);

        // Validate against independently derived ground truth
        if self.config.validation.enabled {
            let underlined_text = self.parser.underlined_text(&input_file)?;
            let validator = ConversionValidator::new();
            let result = validator.validate(&underlined_text, &parsed.entries, parsed.anchor_count);

            if result.is_valid {
                info!("{}", result.summary());
            } else {
                warn!("{}", result.summary());
                warn!("Some narration may have been lost (commonly at page boundaries); review the report");
            }

            if self.config.validation.save_report {
                let report_path = FileManager::validation_report_path(&input_file, &output_dir);
                validator.save_report(&result, Some(&input_file), Some(&srt_path), &report_path)?;
                debug!("Validation report written to {:?}", report_path);
            }
        }

        info!(
            "Conversion completed in {}",
            format_duration(start_time.elapsed().as_millis() as u64)
        );

        Ok(())
    }

    /// Convert every script PDF under a directory.
    ///
    /// Failures are isolated per file: one broken PDF does not stop the run.
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let pdf_files = FileManager::find_files(&input_dir, "pdf")?;

        if pdf_files.is_empty() {
            warn!("No PDF files found in {:?}", input_dir);
            return Ok(());
        }

        info!("Found {} PDF file(s) in {:?}", pdf_files.len(), input_dir);

        let progress_bar = ProgressBar::new(pdf_files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style);

        let mut processed = 0usize;
        let mut failed = 0usize;

        for pdf_file in &pdf_files {
            progress_bar.set_message(
                pdf_file
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            let output_dir = pdf_file
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf();

            match self.run(pdf_file.clone(), output_dir, force_overwrite) {
                Ok(()) => processed += 1,
                Err(e) => {
                    failed += 1;
                    error!("Error processing {:?}: {}", pdf_file, e);
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        info!("Finished processing {} file(s), {} failed", processed, failed);

        Ok(())
    }
}
