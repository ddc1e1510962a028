use std::{fs, path::Path};

use tracing::info;

use crate::{error::Result, solver::SolverParameters};

pub struct SolverParamParser;
impl SolverParamParser {
    /// Read and validate solver parameters from a JSON file.
    pub fn parse(file_path: impl AsRef<Path>) -> Result<SolverParameters> {
        let file_path = file_path.as_ref();
        let file_content = fs::read_to_string(file_path)?;
        let params = Self::from_json(&file_content)?;
        info!(path = %file_path.display(), cells = params.cell_num, cfl = params.cfl, "loaded solver parameters");
        Ok(params)
    }
    pub fn from_json(content: &str) -> Result<SolverParameters> {
        let params: SolverParameters = serde_json::from_str(content)?;
        params.validate()?;
        Ok(params)
    }
}
