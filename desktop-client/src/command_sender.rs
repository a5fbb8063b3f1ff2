use tokio::sync::mpsc;
use common::games::snake::RoundCommand;
use common::log;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<RoundCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<RoundCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, cmd: RoundCommand) {
        if self.tx.send(cmd).is_err() {
            log!("Round session is gone, dropping {:?}", cmd);
        }
    }
}
