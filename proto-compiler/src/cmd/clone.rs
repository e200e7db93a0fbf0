use std::{path::Path, path::PathBuf, process};

use git2::{Oid, Repository};

use argh::FromArgs;

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "clone")]
/// Clone the upstream Cosmos SDK and Tendermint repositories
pub struct CloneCmd {
    /// commit to checkout for the SDK repo
    #[argh(option, short = 'c')]
    sdk_commit: Option<String>,

    /// tag to checkout for the SDK repo
    #[argh(option, short = 't')]
    sdk_tag: Option<String>,

    /// commit to checkout for the SDK repo that carries `cosmos.group.v1beta1`
    #[argh(option, short = 'g')]
    group_commit: Option<String>,

    /// tag to checkout for the Tendermint repo
    #[argh(option)]
    tendermint_tag: Option<String>,

    /// where to checkout the repositories
    #[argh(option, short = 'o')]
    out: PathBuf,
}

pub const COSMOS_SDK_URL: &str = "https://github.com/cosmos/cosmos-sdk";
pub const TENDERMINT_URL: &str = "https://github.com/tendermint/tendermint";

impl CloneCmd {
    pub fn validate(&self) {
        if self.sdk_commit.is_some() && self.sdk_tag.is_some() {
            println!("[error] The --sdk-commit and --sdk-tag options are mutually exclusive.");
            process::exit(1);
        }
    }

    pub fn sdk_subdir(&self) -> PathBuf {
        self.out.join("sdk/")
    }

    pub fn group_subdir(&self) -> PathBuf {
        self.out.join("group/")
    }

    pub fn tendermint_subdir(&self) -> PathBuf {
        self.out.join("tendermint/")
    }

    pub fn run(&self) {
        self.validate();

        let sdk_repo = open_or_clone("Cosmos SDK", COSMOS_SDK_URL, &self.sdk_subdir());

        if let Some(ref rev) = self.sdk_commit {
            checkout_commit(&sdk_repo, rev).unwrap_or_else(|e| {
                println!("[error] Failed to checkout SDK commit {}: {}", rev, e);
                process::exit(1)
            });
        } else if let Some(ref tag) = self.sdk_tag {
            checkout_tag(&sdk_repo, tag).unwrap_or_else(|e| {
                println!("[error] Failed to checkout SDK tag {}: {}", tag, e);
                process::exit(1)
            });
        }

        match &self.group_commit {
            Some(group_commit) => {
                let group_repo =
                    open_or_clone("Cosmos SDK (group)", COSMOS_SDK_URL, &self.group_subdir());

                checkout_commit(&group_repo, group_commit).unwrap_or_else(|e| {
                    println!(
                        "[error] Failed to checkout group commit {}: {}",
                        group_commit, e
                    );
                    process::exit(1)
                });
            }
            None => {
                println!(
                    "[info ] No `-g`/`--group-commit` option passed. The group protos are taken from the SDK checkout."
                )
            }
        }

        match &self.tendermint_tag {
            Some(tag) => {
                let tm_repo =
                    open_or_clone("Tendermint", TENDERMINT_URL, &self.tendermint_subdir());

                checkout_tag(&tm_repo, tag).unwrap_or_else(|e| {
                    println!("[error] Failed to checkout Tendermint tag {}: {}", tag, e);
                    process::exit(1)
                });
            }
            None => {
                println!(
                    "[info ] No `--tendermint-tag` option passed. Skipping the Tendermint repo."
                )
            }
        }
    }
}

fn open_or_clone(label: &str, url: &str, path: &Path) -> Repository {
    if path.exists() {
        println!("[info ] Found {} source at '{}'", label, path.display());

        Repository::open(path).unwrap_or_else(|e| {
            println!("[error] Failed to open repository: {}", e);
            process::exit(1)
        })
    } else {
        println!("[info ] Cloning {} repository...", url);

        let repo = Repository::clone(url, path).unwrap_or_else(|e| {
            println!("[error] Failed to clone the {} repository: {}", label, e);
            process::exit(1)
        });

        println!("[info ] Cloned at '{}'", path.display());

        repo
    }
}

fn checkout_commit(repo: &Repository, rev: &str) -> Result<(), git2::Error> {
    let oid = Oid::from_str(rev)?;
    let commit = repo.find_commit(oid)?;

    // Create a new branch `rev` that points to `commit`
    repo.branch(rev, &commit, true)?;

    let treeish = format!("refs/heads/{}", rev);
    let object = repo.revparse_single(&treeish)?;
    repo.checkout_tree(&object, None)?;
    repo.set_head(&treeish)?;

    println!("[info ] Checked out commit {}", rev);

    Ok(())
}

fn checkout_tag(repo: &Repository, tag_name: &str) -> Result<(), git2::Error> {
    let tag = repo
        .references()?
        .flatten()
        .filter(|r| r.is_tag())
        .flat_map(|r| r.peel_to_tag())
        .find(|t| t.name() == Some(tag_name));

    let tag = match tag {
        Some(tag) => tag,
        None => {
            println!("[error] Could not find tag {}", tag_name);
            process::exit(1);
        }
    };

    let target_oid = tag.target()?.id();
    let commit = repo.find_commit(target_oid)?;

    // Create a new branch `tag_name` that points to `commit`
    repo.branch(tag_name, &commit, true)?;

    let rev = format!("refs/heads/{}", tag_name);
    let obj = repo.revparse_single(&rev)?;
    repo.checkout_tree(&obj, None)?;
    repo.set_head(&rev)?;

    println!("[info ] Checked out tag {}", tag_name);

    Ok(())
}
