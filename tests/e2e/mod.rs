// End-to-end tests for the TTS cache API
//
// Each test spawns the real router on an ephemeral port, backed by in-memory
// fakes for Polly, S3 and SNS. Fakes record every call so tests can check
// which upstream steps ran. test_aws_failures wires the real AWS repositories
// against an unreachable endpoint instead.

mod test_aws_failures;
mod test_cors;
