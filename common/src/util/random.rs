use rand::{distributions::Alphanumeric, thread_rng, Rng};

pub fn generate_alphanumeric(len: usize) -> String {
    thread_rng().sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}
