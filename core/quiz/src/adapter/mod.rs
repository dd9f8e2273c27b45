pub(crate) mod config;
pub(crate) mod llm_completion;
pub(crate) mod progress;
pub(crate) mod stub_completion;

pub(crate) use config::load_file_config;
pub(crate) use llm_completion::ProviderCompletion;
pub(crate) use progress::ConsoleProgress;
#[cfg(test)]
pub(crate) use progress::RecordingProgress;
#[cfg(test)]
pub(crate) use stub_completion::StubCompletion;
