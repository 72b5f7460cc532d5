/// Mock shader compiler for unit tests (no fxc required)
///
/// Records every command it receives and answers with scripted exit codes.

use std::collections::HashMap;
use std::path::Path;
use crate::command::CompileCommand;
use crate::compiler::{CompilerOutput, ShaderCompiler};
use crate::error::{Error, Result};
use crate::stage::ShaderStage;

/// Scripted response for one (shader, stage)
#[derive(Debug, Clone)]
pub enum MockResponse {
    Exit(i32),
    Killed,
    LaunchError(String),
}

#[derive(Default)]
pub struct MockCompiler {
    /// Commands received, in order
    pub calls: Vec<CompileCommand>,
    responses: HashMap<(String, ShaderStage), MockResponse>,
}

impl MockCompiler {
    /// Compiler that succeeds for everything not scripted otherwise
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for `shader` compiled as `stage`
    pub fn respond(mut self, shader: &str, stage: ShaderStage, response: MockResponse) -> Self {
        self.responses.insert((shader.to_string(), stage), response);
        self
    }

    /// (shader, stage) pairs received, in order
    pub fn invoked(&self) -> Vec<(String, ShaderStage)> {
        self.calls.iter().map(|c| (c.shader.clone(), c.stage)).collect()
    }
}

impl ShaderCompiler for MockCompiler {
    fn name(&self) -> &str {
        "mock"
    }

    fn program(&self) -> &Path {
        Path::new("mock-fxc")
    }

    fn compile(&mut self, command: &CompileCommand) -> Result<CompilerOutput> {
        self.calls.push(command.clone());

        match self.responses.get(&(command.shader.clone(), command.stage)) {
            None => Ok(CompilerOutput {
                exit_code: Some(0),
                stdout: "compilation object save succeeded".to_string(),
                stderr: String::new(),
            }),
            Some(MockResponse::Exit(code)) => Ok(CompilerOutput {
                exit_code: Some(*code),
                stdout: String::new(),
                stderr: format!("{}: error X3000: mock failure", command.shader),
            }),
            Some(MockResponse::Killed) => Ok(CompilerOutput::default()),
            Some(MockResponse::LaunchError(msg)) => Err(Error::LaunchFailed(msg.clone())),
        }
    }
}
