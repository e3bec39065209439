//! Shell commands that manage docker access on the target host.

use crate::domain::remote::RemoteCommand;

/// Group that owns the docker socket.
pub const DOCKER_GROUP: &str = "docker";

/// Docker daemon socket on the target host.
pub const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Create the docker group; exits 0 even if it already exists.
#[must_use]
pub fn create_group() -> RemoteCommand {
    RemoteCommand::new(format!("groupadd {DOCKER_GROUP} &>/dev/null || true"))
}

/// Add `user` to the docker group; exits 0 on failure.
#[must_use]
pub fn add_user_to_group(user: &str) -> RemoteCommand {
    RemoteCommand::new(format!("usermod -aG {DOCKER_GROUP} {user} || true"))
}

#[must_use]
pub fn make_socket_readable() -> RemoteCommand {
    RemoteCommand::new(format!("chmod a+r {DOCKER_SOCKET}"))
}

#[must_use]
pub fn chown_socket(user: &str) -> RemoteCommand {
    RemoteCommand::new(format!("chown {user}:{DOCKER_GROUP} {DOCKER_SOCKET}"))
}

/// Print the GID field of every `/etc/group` line mentioning docker.
#[must_use]
pub fn query_group_id() -> RemoteCommand {
    RemoteCommand::new(format!("grep {DOCKER_GROUP} /etc/group | cut -d ':' -f 3"))
}
