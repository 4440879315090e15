use isp_rs::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    #[serde(flatten)]
    case: Case,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
enum Case {
    Detrend { input: ArrayData, params: DetrendParams },
    NiceSize { targets: Vec<i64>, params: SizeParams },
}

#[derive(Debug, Deserialize, Serialize)]
struct ArrayData {
    extents: Vec<usize>,
    #[serde(default)]
    windows: Vec<usize>,
    re: Vec<f32>,
    #[serde(default)]
    im: Option<Vec<f32>>,
}

#[derive(Debug, Deserialize, Serialize)]
struct DetrendParams {
    order: usize,
}

#[derive(Debug, Deserialize, Serialize)]
struct SizeParams {
    min_exp2: i32,
    max_odd_prime: i32,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    coefficients: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    residual_re: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    residual_im: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nice: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nice_small: Vec<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = Path::new("../output/reference");
    let output_dir = Path::new("../output/isp_rs");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Run validate.py first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", entry.file_name());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    data.result = match &data.case {
        Case::Detrend { input, params } => run_detrend(input, params)?,
        Case::NiceSize { targets, params } => run_nice_size(targets, params)?,
    };

    let output_path = output_dir.join(input_path.file_name().ok_or("missing file name")?);
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(())
}

fn run_detrend(input: &ArrayData, params: &DetrendParams) -> Result<ResultData, Box<dyn Error>> {
    let grid = Grid::new(&input.extents)?.with_windows(&input.windows)?;
    let fit = Detrend::new().order(params.order).build(&grid)?;

    let mut result = ResultData::default();
    match &input.im {
        None => {
            let mut re = input.re.clone();
            result.coefficients = fit.detrend(&mut re)?;
            result.residual_re = re;
        }
        Some(im) => {
            let mut values: Vec<Complex<f32>> = input
                .re
                .iter()
                .zip(im)
                .map(|(&a, &b)| Complex::new(a, b))
                .collect();
            result.coefficients = fit.detrend(&mut values)?.to_concatenated();
            result.residual_re = values.iter().map(|c| c.re).collect();
            result.residual_im = values.iter().map(|c| c.im).collect();
        }
    }
    Ok(result)
}

fn run_nice_size(targets: &[i64], params: &SizeParams) -> Result<ResultData, Box<dyn Error>> {
    let mut result = ResultData::default();
    for &target in targets {
        result
            .nice
            .push(nice_size(target, params.min_exp2, params.max_odd_prime)?);
        result
            .nice_small
            .push(nice_small_size(target, params.min_exp2, params.max_odd_prime)?);
    }
    Ok(result)
}
