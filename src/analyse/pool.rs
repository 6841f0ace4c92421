use std::thread;
use crossbeam_channel::unbounded;
use log::trace;

// Runs `f` over every job on up to `workers` threads and returns the results
// in job order.
pub fn pool<T, R, F>(workers: usize, jobs: Vec<T>, f: F) -> Vec<R>
    where T: Send,
          R: Send,
          F: Fn(T) -> R + Sync
{
    let count   = jobs.len();
    let workers = workers.min(count).max(1);

    let (tx, rx)   = unbounded();
    let (rtx, rrx) = unbounded();

    for job in jobs.into_iter().enumerate() {
        let _ = tx.send(job);
    }
    drop(tx);

    thread::scope(|s| {
        for n in 0..workers {
            let rx  = rx.clone();
            let rtx = rtx.clone();
            let f   = &f;
            s.spawn(move || {
                for (index, job) in rx.iter() {
                    let _ = rtx.send((index, f(job)));
                }
                trace!("worker {} finished", n);
            });
        }
    });
    drop(rtx);

    let mut results = rrx.iter().collect::<Vec<_>>();
    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, r)| r).collect()
}
