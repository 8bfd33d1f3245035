//! Periodic tasks driven by the fixed timestep.
//!
//! Periods are converted to a whole number of fixed steps when scheduled, so a
//! 0.5 s task on a 1/60 s step fires on exactly every 30th step forever.

/// Handle to a periodic task registered with a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u32);

#[derive(Debug, Clone)]
struct Task {
    id: TaskId,
    period_steps: u32,
    remaining: u32,
}

/// Set of repeating tasks advanced one fixed step at a time.
#[derive(Debug, Clone)]
pub struct Scheduler {
    step_dt: f32,
    tasks: Vec<Task>,
    next_id: u32,
}

impl Scheduler {
    pub fn new(step_dt: f32) -> Self {
        Self {
            step_dt,
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of steps a period of `period` seconds spans (at least one).
    pub fn steps_for(&self, period: f32) -> u32 {
        let steps = (period / self.step_dt).round();
        if steps.is_finite() && steps >= 1.0 {
            steps as u32
        } else {
            1
        }
    }

    /// Register a task that fires every `period` seconds, first firing one full
    /// period from now.
    pub fn schedule_interval(&mut self, period: f32) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let period_steps = self.steps_for(period);
        self.tasks.push(Task {
            id,
            period_steps,
            remaining: period_steps,
        });
        id
    }

    /// Stop a task. Returns false if it was not scheduled.
    pub fn unschedule(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        before != self.tasks.len()
    }

    /// Stop every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Advance one fixed step, appending the tasks due on this step to `fired`
    /// in registration order.
    pub fn step_into(&mut self, fired: &mut Vec<TaskId>) {
        for task in &mut self.tasks {
            task.remaining -= 1;
            if task.remaining == 0 {
                task.remaining = task.period_steps;
                fired.push(task.id);
            }
        }
    }
}
